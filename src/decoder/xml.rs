//! XML legacy payload extractor
//!
//! Older documents encode the identity as markup. Two shapes exist in the wild:
//!
//! - leaf elements: `<uid>123456789012</uid><name>...</name>...`
//! - attributes on one element: `<PrintLetterBarcodeData uid="..." name="..." .../>`
//!
//! Both are read by the same scanner. Scanners frequently hand over a fragment
//! with several top-level elements and a sloppy prolog (`<?xml ...>`), so the
//! scanner accepts those, but it does insist on balanced, terminated tags and
//! quoted attribute values.

use crate::decoder::error::{DecodeError, DecodeResult};
use crate::types::{join_present, FieldKey, RawFieldBag};
use tracing::debug;

/// Name/value pairs found in document order (attributes and leaf element text)
type Pairs = Vec<(String, String)>;

struct OpenElement {
    name: String,
    text: String,
    has_children: bool,
}

/// Extract identity fields from an XML legacy payload
pub fn extract_xml(text: &str) -> DecodeResult<RawFieldBag> {
    let pairs = scan_markup(text)?;
    debug!("XML scan produced {} name/value pair(s)", pairs.len());

    let mut bag = RawFieldBag::new();
    let mut address = XmlAddress::default();

    for (name, value) in &pairs {
        let value = value.trim();
        match name.to_ascii_lowercase().as_str() {
            "uid" => {
                bag.insert_if_absent(FieldKey::MaskedId, value);
            }
            "name" => {
                bag.insert_if_absent(FieldKey::Name, value);
            }
            "dob" => {
                bag.insert_if_absent(FieldKey::Dob, value);
            }
            "yob" => {
                bag.insert_if_absent(FieldKey::Yob, value);
            }
            "gender" => {
                bag.insert_if_absent(FieldKey::Gender, value);
            }
            "co" => {
                bag.insert_if_absent(FieldKey::CareOf, value);
            }
            "house" => set_once(&mut address.house, value),
            "street" => set_once(&mut address.street, value),
            "lm" => set_once(&mut address.landmark, value),
            "loc" => set_once(&mut address.locality, value),
            "vtc" => set_once(&mut address.vtc, value),
            "dist" => set_once(&mut address.district, value),
            "state" => {
                bag.insert_if_absent(FieldKey::State, value);
            }
            "pc" => {
                bag.insert_if_absent(FieldKey::Pincode, value);
            }
            _ => {}
        }
    }

    address.fill(&mut bag);
    Ok(bag)
}

#[derive(Default)]
struct XmlAddress {
    house: Option<String>,
    street: Option<String>,
    landmark: Option<String>,
    locality: Option<String>,
    vtc: Option<String>,
    district: Option<String>,
}

impl XmlAddress {
    fn fill(&self, bag: &mut RawFieldBag) {
        if let Some(house_and_street) =
            join_present([self.house.as_deref(), self.street.as_deref()])
        {
            bag.insert(FieldKey::HouseAndStreet, house_and_street);
        }
        if let Some(line) = join_present([
            self.house.as_deref(),
            self.street.as_deref(),
            self.landmark.as_deref(),
            self.locality.as_deref(),
        ]) {
            bag.insert(FieldKey::AddressLine, line);
        }
        bag.insert_opt(FieldKey::Locality, self.locality.as_deref());
        bag.insert_opt(FieldKey::District, self.district.as_deref());
        bag.insert_opt(
            FieldKey::City,
            self.vtc.as_deref().or(self.district.as_deref()),
        );
    }
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

/// Walk the markup, checking well-formedness and collecting name/value pairs
fn scan_markup(src: &str) -> DecodeResult<Pairs> {
    let mut pairs = Pairs::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut pos = 0;

    while pos < src.len() {
        let rest = &src[pos..];
        let Some(lt) = rest.find('<') else {
            push_text(&mut stack, rest)?;
            break;
        };
        push_text(&mut stack, &rest[..lt])?;
        pos += lt;
        let rest = &src[pos..];

        if rest.starts_with("<!--") {
            pos += skip_past(rest, "-->", "comment")?;
        } else if let Some(cdata) = rest.strip_prefix("<![CDATA[") {
            let end = cdata
                .find("]]>")
                .ok_or_else(|| DecodeError::malformed("unterminated CDATA section"))?;
            match stack.last_mut() {
                Some(open) => open.text.push_str(&cdata[..end]),
                None => return Err(DecodeError::malformed("CDATA outside of any element")),
            }
            pos += "<![CDATA[".len() + end + "]]>".len();
        } else if rest.starts_with("<?") {
            // Prolog or processing instruction
            pos += skip_past(rest, ">", "declaration")?;
        } else if rest.starts_with("<!") {
            pos += skip_declaration(rest)?;
        } else if let Some(close) = rest.strip_prefix("</") {
            let end = close
                .find('>')
                .ok_or_else(|| DecodeError::malformed("unterminated end tag"))?;
            let name = close[..end].trim();
            let open = stack.pop().ok_or_else(|| {
                DecodeError::malformed(format!("unexpected end tag </{}>", name))
            })?;
            if open.name != name {
                return Err(DecodeError::malformed(format!(
                    "end tag </{}> does not match <{}>",
                    name, open.name
                )));
            }
            if !open.has_children {
                pairs.push((open.name, open.text));
            }
            pos += 2 + end + 1;
        } else {
            let (consumed, name, attributes, self_closing) = parse_start_tag(rest)?;
            if let Some(parent) = stack.last_mut() {
                parent.has_children = true;
            }
            pairs.extend(attributes);
            if !self_closing {
                stack.push(OpenElement {
                    name,
                    text: String::new(),
                    has_children: false,
                });
            }
            pos += consumed;
        }
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    Ok(pairs)
}

fn push_text(stack: &mut [OpenElement], text: &str) -> DecodeResult<()> {
    match stack.last_mut() {
        Some(open) => {
            open.text.push_str(&decode_entities(text)?);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(DecodeError::malformed("text outside of any element")),
    }
}

/// Byte length of a `<!...>` declaration, including a doctype's `[...]` internal subset
fn skip_declaration(rest: &str) -> DecodeResult<usize> {
    let head_end = skip_past(rest, ">", "declaration")?;
    let Some(open) = rest[..head_end].find('[') else {
        return Ok(head_end);
    };
    let close = open + skip_past(&rest[open..], "]", "internal subset")?;
    Ok(close + skip_past(&rest[close..], ">", "declaration")?)
}

/// Byte length from the start of `rest` through the end of `terminator`
fn skip_past(rest: &str, terminator: &str, what: &str) -> DecodeResult<usize> {
    rest.find(terminator)
        .map(|idx| idx + terminator.len())
        .ok_or_else(|| DecodeError::malformed(format!("unterminated {}", what)))
}

/// Parse `<name attr="v" ...>` or `<name .../>`
///
/// Returns (bytes consumed, element name, attributes, self-closing).
fn parse_start_tag(tag: &str) -> DecodeResult<(usize, String, Pairs, bool)> {
    let bytes = tag.as_bytes();
    let mut i = 1;

    let name_start = i;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'/' && bytes[i] != b'>'
    {
        i += 1;
    }
    let name = &tag[name_start..i];
    if name.is_empty() || name.contains(['<', '=', '"', '\'']) {
        return Err(DecodeError::malformed("invalid element name"));
    }

    let mut attributes = Pairs::new();
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return Err(DecodeError::malformed(format!("unterminated tag <{}", name))),
            Some(b'>') => return Ok((i + 1, name.to_string(), attributes, false)),
            Some(b'/') => {
                if bytes.get(i + 1) == Some(&b'>') {
                    return Ok((i + 2, name.to_string(), attributes, true));
                }
                return Err(DecodeError::malformed(format!("stray '/' in <{}>", name)));
            }
            Some(_) => {}
        }

        let attr_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/' | b'<')
        {
            i += 1;
        }
        let attr_name = &tag[attr_start..i];
        if attr_name.is_empty() {
            return Err(DecodeError::malformed(format!("invalid attribute in <{}>", name)));
        }

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            return Err(DecodeError::malformed(format!(
                "attribute {} has no value",
                attr_name
            )));
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let quote = match bytes.get(i) {
            Some(&q @ (b'"' | b'\'')) => q,
            _ => {
                return Err(DecodeError::malformed(format!(
                    "attribute {} is not quoted",
                    attr_name
                )))
            }
        };
        i += 1;
        let value_start = i;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        if i >= bytes.len() {
            return Err(DecodeError::malformed(format!(
                "unterminated value for attribute {}",
                attr_name
            )));
        }
        let value = decode_entities(&tag[value_start..i])?;
        i += 1;

        attributes.push((attr_name.to_string(), value));
    }
}

/// Replace predefined and numeric character references
fn decode_entities(text: &str) -> DecodeResult<String> {
    if !text.contains('&') {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = after
            .find(';')
            .ok_or_else(|| DecodeError::malformed("unterminated character reference"))?;
        let entity = &after[..semi];
        let decoded = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => numeric_reference(entity).ok_or_else(|| {
                DecodeError::malformed(format!("unknown entity &{};", entity))
            })?,
        };
        out.push(decoded);
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn numeric_reference(entity: &str) -> Option<char> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(code)
}
