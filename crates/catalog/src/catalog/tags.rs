use std::collections::BTreeSet;

use crate::models::ComponentEntry;

const SUPPORTED_IMAGES: &[&str] = &[
    "redhat-openjdk-18/openjdk18-openshift:latest",
    "openjdk/openjdk-11-rhel8:latest",
    "openjdk/openjdk-11-rhel7:latest",
    "ubi8/openjdk-11:latest",
    "centos/nodejs-10-centos7:latest",
    "centos/nodejs-12-centos7:latest",
    "rhscl/nodejs-10-rhel7:latest",
    "rhscl/nodejs-12-rhel7:latest",
    "rhoar-nodejs/nodejs-10:latest",
    "nodejs/nodejs-12-rhel7:latest",
];

/// Decides whether a single tag of a component is known to build.
pub trait TagSupport {
    fn is_supported(&self, entry: &ComponentEntry, tag: &str) -> bool;
}

impl<F> TagSupport for F
where
    F: Fn(&ComponentEntry, &str) -> bool,
{
    fn is_supported(&self, entry: &ComponentEntry, tag: &str) -> bool {
        self(entry, tag)
    }
}

/// Splits the visible tags of `entry` into (supported, unsupported), keeping their order.
pub fn slice_supported_tags(
    entry: &ComponentEntry,
    support: &dyn TagSupport,
) -> (Vec<String>, Vec<String>) {
    entry
        .tags()
        .iter()
        .cloned()
        .partition(|tag| support.is_supported(entry, tag))
}

/// Tag support based on the image each tag points at.
#[derive(Clone, Debug)]
pub struct SupportedImages {
    images: BTreeSet<String>,
}

impl SupportedImages {
    pub fn new() -> Self {
        Self {
            images: SUPPORTED_IMAGES.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn with_images(mut self, images: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.images
            .extend(images.into_iter().map(|i| normalize_image(i.as_ref())));
        self
    }
}

impl Default for SupportedImages {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSupport for SupportedImages {
    fn is_supported(&self, entry: &ComponentEntry, tag: &str) -> bool {
        entry
            .spec
            .image_stream_tags
            .get(tag)
            .map(|image| self.images.contains(&normalize_image(image)))
            .unwrap_or(false)
    }
}

// docker.io/centos/nodejs-10-centos7 -> centos/nodejs-10-centos7:latest
fn normalize_image(image: &str) -> String {
    let image = match image.split_once('/') {
        Some((host, rest)) if host.contains('.') || host.contains(':') || host == "localhost" => {
            rest
        }
        _ => image,
    };

    let (name, digest) = match image.split_once('@') {
        Some((name, digest)) => (name, Some(digest)),
        None => (image, None),
    };

    if digest.is_some() {
        return name.to_string();
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(':') {
        name.to_string()
    } else {
        format!("{name}:latest")
    }
}
