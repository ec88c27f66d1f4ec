// Rust guideline compliant 2026-10-15

//! Decoding of Jira XML exports.
//!
//! Jira's "XML" export is an RSS document: `rss > channel > item*`. The serde
//! types below mirror that element tree and are kept separate from
//! [`SourceItem`] so the rest of the crate never sees XML details.

use crate::fields::CustomFields;
use crate::{Result, SourceComment, SourceItem};
use serde::Deserialize;
use std::path::Path;

/// Decodes a Jira XML export.
///
/// # Arguments
///
/// * `xml` - The export document
///
/// # Returns
///
/// Every `item` of the export, in document order.
///
/// # Errors
///
/// Returns `Error::Xml` if the document is not well-formed or does not have
/// the `rss > channel` shape.
pub fn decode_export(xml: &str) -> Result<Vec<SourceItem>> {
    let export: XmlExport = quick_xml::de::from_str(xml)?;
    let items: Vec<SourceItem> = export
        .channel
        .items
        .into_iter()
        .map(XmlItem::into_source)
        .collect();
    tracing::debug!(items = items.len(), "decoded Jira export");
    Ok(items)
}

/// Reads and decodes a Jira XML export file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn decode_file(path: &Path) -> Result<Vec<SourceItem>> {
    let xml = std::fs::read_to_string(path)?;
    decode_export(&xml)
}

// ============================================================================
// Element tree
// ============================================================================

#[derive(Debug, Deserialize)]
struct XmlExport {
    #[serde(default)]
    channel: XmlChannel,
}

#[derive(Debug, Default, Deserialize)]
struct XmlChannel {
    #[serde(default, rename = "item")]
    items: Vec<XmlItem>,
}

/// Element whose text is wanted and whose attributes are not.
#[derive(Debug, Default, Deserialize)]
struct XmlText {
    #[serde(default, rename = "$text")]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlUser {
    #[serde(default, rename = "@username")]
    username: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlLabels {
    #[serde(default, rename = "label")]
    labels: Vec<XmlText>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlComments {
    #[serde(default, rename = "comment")]
    comments: Vec<XmlComment>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlComment {
    #[serde(default, rename = "@id")]
    id: String,
    #[serde(default, rename = "@author")]
    author: String,
    #[serde(default, rename = "@created")]
    created: String,
    #[serde(default, rename = "$text")]
    body: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlCustomFields {
    #[serde(default, rename = "customfield")]
    fields: Vec<XmlCustomField>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlCustomField {
    #[serde(default, rename = "customfieldname")]
    name: XmlText,
    #[serde(default, rename = "customfieldvalues")]
    values: XmlCustomFieldValues,
}

#[derive(Debug, Default, Deserialize)]
struct XmlCustomFieldValues {
    #[serde(default, rename = "customfieldvalue")]
    values: Vec<XmlText>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlItem {
    #[serde(default)]
    key: XmlText,
    #[serde(default, rename = "type")]
    issue_type: XmlText,
    #[serde(default)]
    summary: XmlText,
    #[serde(default)]
    description: XmlText,
    #[serde(default)]
    status: XmlText,
    #[serde(default)]
    project: XmlText,
    #[serde(default)]
    parent: Option<XmlText>,
    #[serde(default)]
    assignee: XmlUser,
    #[serde(default)]
    reporter: XmlUser,
    #[serde(default)]
    labels: XmlLabels,
    #[serde(default, rename = "component")]
    components: Vec<XmlText>,
    #[serde(default)]
    comments: XmlComments,
    #[serde(default)]
    customfields: XmlCustomFields,
    #[serde(default)]
    created: XmlText,
    #[serde(default)]
    updated: XmlText,
    #[serde(default)]
    resolved: XmlText,
}

// ============================================================================
// Conversion to the source model
// ============================================================================

fn texts(nodes: Vec<XmlText>) -> Vec<String> {
    nodes.into_iter().map(|node| node.text).collect()
}

impl XmlItem {
    fn into_source(self) -> SourceItem {
        let custom_fields: CustomFields = self
            .customfields
            .fields
            .into_iter()
            .map(|field| (field.name.text.trim().to_string(), texts(field.values.values)))
            .collect();

        SourceItem {
            key: self.key.text.trim().to_string(),
            issue_type: self.issue_type.text.trim().to_string(),
            summary: self.summary.text,
            description: self.description.text,
            status: self.status.text.trim().to_string(),
            project: self.project.text,
            assignee: self.assignee.username,
            reporter: self.reporter.username,
            labels: texts(self.labels.labels),
            components: texts(self.components),
            custom_fields,
            comments: self
                .comments
                .comments
                .into_iter()
                .map(|c| SourceComment {
                    id: c.id,
                    author: c.author,
                    created: c.created,
                    body: c.body,
                })
                .collect(),
            created: self.created.text,
            updated: self.updated.text,
            resolved: self.resolved.text,
            parent: self
                .parent
                .map(|p| p.text.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }
}
