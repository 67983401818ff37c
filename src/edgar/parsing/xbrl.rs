use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Node, NodeType};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use super::types::{Context, Dimension, Fact, Period, XbrlDocument};
use crate::error::{FinancialsError, Result};

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// Root children that describe the document rather than report a value
const NON_FACT_ELEMENTS: [&str; 7] = [
    "context",
    "unit",
    "xbrl",
    "schemaRef",
    "linkbaseRef",
    "roleRef",
    "arcroleRef",
];

/// Decodes an XBRL instance into document-ordered facts and a context table.
///
/// `name` identifies the source in errors and in the returned document.
pub fn decode_document(name: &str, bytes: &[u8]) -> Result<XbrlDocument> {
    let decode_error = |message: String| FinancialsError::Decode {
        name: name.to_string(),
        message,
    };

    let raw_xml = std::str::from_utf8(bytes).map_err(|e| decode_error(e.to_string()))?;
    let raw_xml = raw_xml.trim_start_matches('\u{feff}');

    let xml_tree = roxmltree::Document::parse(raw_xml).map_err(|e| decode_error(e.to_string()))?;

    let root = xml_tree.root_element();
    if root.tag_name().name() != "xbrl" {
        return Err(decode_error(format!(
            "expected an xbrl root element, found '{}'",
            root.tag_name().name()
        )));
    }

    let elem = root
        .children()
        .filter(|e| e.node_type() == NodeType::Element);

    let mut contexts: HashMap<String, Context> = HashMap::new();
    for child in elem.clone().filter(|e| e.tag_name().name() == "context") {
        let Some(context) = decode_context(child) else {
            log::debug!("Skipping context without id or period");
            continue;
        };
        contexts.insert(context.id.clone(), context);
    }

    let facts: Vec<Fact> = elem
        .filter(|e| {
            !NON_FACT_ELEMENTS.contains(&e.tag_name().name()) && e.tag_name().namespace().is_some()
        })
        .map(decode_fact)
        .collect();

    log::debug!(
        "Decoded {}: {} facts, {} contexts",
        name,
        facts.len(),
        contexts.len()
    );

    Ok(XbrlDocument {
        name: name.to_string(),
        facts,
        contexts,
    })
}

fn decode_context(node: Node) -> Option<Context> {
    let id = node.attribute("id")?;

    let period_node = node.children().find(|e| e.tag_name().name() == "period")?;
    let period_value = |tag: &str| {
        period_node
            .children()
            .find(|e| e.tag_name().name() == tag)
            .and_then(|e| e.text())
            .map(|text| text.trim().to_string())
    };

    let period = if let Some(instant) = period_value("instant") {
        Period::Instant(instant)
    } else if let (Some(start), Some(end)) = (period_value("startDate"), period_value("endDate")) {
        Period::Duration { start, end }
    } else if period_node.children().any(|e| e.tag_name().name() == "forever") {
        Period::Forever
    } else {
        return None;
    };

    let dimensions = node
        .descendants()
        .filter(|e| e.tag_name().name() == "explicitMember")
        .filter_map(|member| {
            let axis = member.attribute("dimension")?;
            Some(Dimension {
                axis: axis.to_string(),
                member: member.text().unwrap_or("").trim().to_string(),
            })
        })
        .collect();

    Some(Context {
        id: id.to_string(),
        period,
        dimensions,
    })
}

fn decode_fact(node: Node) -> Fact {
    let namespace = node.tag_name().namespace().unwrap_or("");
    let prefix = node.lookup_prefix(namespace).unwrap_or("");
    let context_ref = node.attribute("contextRef").map(str::to_string);
    let nil = node
        .attribute((XSI_NS, "nil"))
        .is_some_and(|v| v.trim() == "true");
    let value = normalize_value(node.text().unwrap_or(""));

    let valid = context_ref.is_some() && !nil && !value.is_empty();
    if !valid {
        log::debug!("Invalid fact {}:{}", prefix, node.tag_name().name());
    }

    Fact {
        prefix: prefix.to_string(),
        name: node.tag_name().name().to_string(),
        context_ref,
        unit_ref: node.attribute("unitRef").map(str::to_string),
        decimals: node.attribute("decimals").map(str::to_string),
        value,
        valid,
    }
}

fn normalize_value(raw: &str) -> String {
    let value = raw.nfkc().collect::<String>();
    WHITESPACE.replace_all(value.trim(), " ").into_owned()
}
