//! # Sibling Linking
//!
//! Second compile phase. Some keywords only mean something next to a
//! sibling:
//!
//! - `exclusiveMinimum` / `exclusiveMaximum` set the `exclusive` flag of
//!   `minimum` / `maximum`. A non-boolean value leaves the flag `false`.
//! - `additionalItems` sets the overflow policy of tuple-form `items`.
//! - `properties` takes over the decoded `patternProperties` set and the
//!   `additionalProperties` policy, so that each instance key is checked
//!   once. When `additionalProperties` restricts keys and `properties` is
//!   absent, an empty `properties` is created to carry it.
//!
//! The result is the flat validator list of a [`Schema`](crate::Schema),
//! in evaluation order.

use serde_json::{Map, Value};

use crate::error::CompileError;
use crate::keyword::{DecodedKeywords, Keyword, KeywordName};
use crate::keywords::object::Properties;
use crate::keywords::Additional;

fn exclusive_flag(siblings: &Map<String, Value>, keyword: &str) -> bool {
    siblings.get(keyword).and_then(Value::as_bool).unwrap_or(false)
}

/// Link decoded keywords against the raw sibling fragment they came from.
pub(crate) fn link(
    decoded: DecodedKeywords,
    siblings: &Map<String, Value>,
) -> Result<Vec<Keyword>, CompileError> {
    let DecodedKeywords { mut known, opaque } = decoded;

    let mut additional_items = Some(Additional::decode(
        "additionalItems",
        siblings.get("additionalItems"),
    )?);
    let additional_properties =
        Additional::decode("additionalProperties", siblings.get("additionalProperties"))?;

    if !known.contains_key(&KeywordName::Properties)
        && !matches!(additional_properties, Additional::Allowed)
    {
        known.insert(KeywordName::Properties, Keyword::Properties(Properties::empty()));
    }
    let mut additional_properties = Some(additional_properties);

    let mut patterns = None;
    if known.contains_key(&KeywordName::Properties) {
        if let Some(Keyword::PatternProperties(p)) = known.remove(&KeywordName::PatternProperties) {
            patterns = Some(p);
        }
    }

    let mut keywords = Vec::with_capacity(known.len() + opaque.len());
    for (_, keyword) in known {
        let linked = match keyword {
            Keyword::Minimum(m) => {
                Keyword::Minimum(m.with_exclusive(exclusive_flag(siblings, "exclusiveMinimum")))
            }
            Keyword::Maximum(m) => {
                Keyword::Maximum(m.with_exclusive(exclusive_flag(siblings, "exclusiveMaximum")))
            }
            Keyword::Items(items) if items.is_tuple() => {
                let policy = additional_items.take().unwrap_or(Additional::Allowed);
                Keyword::Items(items.with_additional(policy))
            }
            Keyword::Properties(p) => {
                let policy = additional_properties.take().unwrap_or(Additional::Allowed);
                Keyword::Properties(p.link(patterns.take(), policy))
            }
            other => other,
        };
        keywords.push(linked);
    }
    keywords.extend(opaque.into_iter().map(Keyword::Opaque));
    Ok(keywords)
}
