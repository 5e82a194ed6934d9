//! Shared XML writing helpers.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Attribute list: static names, owned values.
pub type Attrs<'a> = &'a [(&'a str, String)];

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn element<'a>(name: &'a str, attrs: Attrs<'_>) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attrs {
        start.push_attribute((*key, value.as_str()));
    }
    start
}

pub fn write_start<W: Write>(xml: &mut Writer<W>, name: &str, attrs: Attrs<'_>) -> Result<()> {
    xml.write_event(Event::Start(element(name, attrs)))?;
    Ok(())
}

pub fn write_end<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn write_empty<W: Write>(xml: &mut Writer<W>, name: &str, attrs: Attrs<'_>) -> Result<()> {
    xml.write_event(Event::Empty(element(name, attrs)))?;
    Ok(())
}

/// Write `<name attrs>text</name>`.
pub fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    attrs: Attrs<'_>,
    text: &str,
) -> Result<()> {
    write_start(xml, name, attrs)?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    write_end(xml, name)
}
