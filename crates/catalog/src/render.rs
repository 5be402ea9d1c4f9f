use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::{
    catalog::{
        AggregateResult,
        disambiguate::display_names,
        partition::{CatalogPartitions, partition},
        tags::{TagSupport, slice_supported_tags},
    },
    models::{ComponentEntry, DevfileEntry, OutputFormat},
};

pub mod table_writer;
use table_writer::TableWriter;

const LIST_KIND: &str = "List";
const LIST_API_VERSION: &str = "catalog.dev/v1alpha1";

const TABLE_MIN_WIDTH: usize = 5;
const TABLE_PADDING: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListMetadata {}

/// The single document emitted in structured mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCatalogList {
    pub kind: String,
    pub api_version: String,
    pub metadata: ListMetadata,
    #[serde(rename = "s2iItems")]
    pub s2i_items: Vec<ComponentEntry>,
    pub devfile_items: Vec<DevfileEntry>,
}

pub struct Renderer<'a> {
    format: OutputFormat,
    list_all_devfiles: bool,
    active_namespace: &'a str,
    tag_support: &'a dyn TagSupport,
}

impl<'a> Renderer<'a> {
    pub fn new(
        format: OutputFormat,
        list_all_devfiles: bool,
        active_namespace: &'a str,
        tag_support: &'a dyn TagSupport,
    ) -> Self {
        Self {
            format,
            list_all_devfiles,
            active_namespace,
            tag_support,
        }
    }

    #[tracing::instrument(skip(self, aggregate, out), fields(format = ?self.format), level = "trace")]
    pub fn render<W: Write>(
        &self,
        aggregate: &AggregateResult,
        mut out: W,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let document = serde_json::to_value(self.structured(aggregate))
                    .context("failed to serialize component list")?;
                let output = colored_json::to_colored_json_auto(&document)
                    .context("failed to format component list")?;

                writeln!(out, "{output}")?;
                out.flush()?;
            }
            OutputFormat::Table => {
                let partitions = partition(aggregate, self.tag_support, self.list_all_devfiles);

                self.write_tables(&partitions, out)?;
            }
        }

        Ok(())
    }

    /// Every image component with only its supported tags listed, and every devfile component.
    pub fn structured(&self, aggregate: &AggregateResult) -> CombinedCatalogList {
        let s2i_items = aggregate
            .images
            .items
            .iter()
            .map(|image| {
                let (supported, _) = slice_supported_tags(image, self.tag_support);
                image.with_supported_tags(supported)
            })
            .collect();

        CombinedCatalogList {
            kind: LIST_KIND.into(),
            api_version: LIST_API_VERSION.into(),
            metadata: ListMetadata::default(),
            s2i_items,
            devfile_items: aggregate.devfiles.items.clone(),
        }
    }

    pub fn write_tables<W: Write>(
        &self,
        partitions: &CatalogPartitions,
        out: W,
    ) -> anyhow::Result<()> {
        let mut w = TableWriter::new(out)
            .with_min_width(TABLE_MIN_WIDTH)
            .with_padding(TABLE_PADDING);

        if !partitions.supported_images.is_empty() || !partitions.unsupported_images.is_empty() {
            w.write_line(["OpenShift Components:"]);
            w.write_line(["NAME", "PROJECT", "TAGS", "SUPPORTED"]);

            self.write_image_rows(&mut w, &partitions.supported_images, "YES");
            self.write_image_rows(&mut w, &partitions.unsupported_images, "NO");

            w.blank_line();
        }

        let show_unsupported_devfiles =
            self.list_all_devfiles && !partitions.unsupported_devfiles.is_empty();

        if !partitions.supported_devfiles.is_empty() || show_unsupported_devfiles {
            w.write_line(["Devfile Components:"]);
            w.write_line(["NAME", "DESCRIPTION", "REGISTRY", "SUPPORTED"]);

            write_devfile_rows(&mut w, &partitions.supported_devfiles, "YES");
            if show_unsupported_devfiles {
                write_devfile_rows(&mut w, &partitions.unsupported_devfiles, "NO");
            }

            w.blank_line();
        }

        w.flush().context("failed to write component tables")?;

        Ok(())
    }

    fn write_image_rows<W: Write>(
        &self,
        w: &mut TableWriter<W>,
        section: &[ComponentEntry],
        supported: &str,
    ) {
        let names = display_names(section, self.active_namespace);

        for (name, image) in names.into_iter().zip(section) {
            w.write_line([
                name,
                image.namespace().to_string(),
                image.tags().join(","),
                supported.to_string(),
            ]);
        }
    }
}

fn write_devfile_rows<W: Write>(
    w: &mut TableWriter<W>,
    section: &[DevfileEntry],
    supported: &str,
) {
    for devfile in section {
        w.write_line([
            devfile.name.as_str(),
            devfile.description.as_str(),
            devfile.registry.name.as_str(),
            supported,
        ]);
    }
}
