use crate::models::{ComponentEntry, DevfileEntry};

use super::{
    AggregateResult,
    tags::{TagSupport, slice_supported_tags},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogPartitions {
    pub supported_images: Vec<ComponentEntry>,
    pub unsupported_images: Vec<ComponentEntry>,

    pub supported_devfiles: Vec<DevfileEntry>,
    /// only populated when every devfile component was asked for
    pub unsupported_devfiles: Vec<DevfileEntry>,
}

/// Splits both listings into supported and unsupported sequences.
///
/// An image entry carrying both kinds of tags shows up in both image
/// sequences, each copy holding only its own subset of tags. Entries without
/// any visible tag show up in neither.
pub fn partition(
    aggregate: &AggregateResult,
    support: &dyn TagSupport,
    list_all_devfiles: bool,
) -> CatalogPartitions {
    let mut partitions = CatalogPartitions::default();

    for image in &aggregate.images.items {
        let (supported, unsupported) = slice_supported_tags(image, support);

        if !supported.is_empty() {
            partitions.supported_images.push(image.with_tags(supported));
        }
        if !unsupported.is_empty() {
            partitions.unsupported_images.push(image.with_tags(unsupported));
        }
    }

    for devfile in &aggregate.devfiles.items {
        if devfile.support {
            partitions.supported_devfiles.push(devfile.clone());
        } else if list_all_devfiles {
            partitions.unsupported_devfiles.push(devfile.clone());
        }
    }

    tracing::trace!(
        supported_images = partitions.supported_images.len(),
        unsupported_images = partitions.unsupported_images.len(),
        supported_devfiles = partitions.supported_devfiles.len(),
        unsupported_devfiles = partitions.unsupported_devfiles.len(),
        "partitioned catalog"
    );

    partitions
}
