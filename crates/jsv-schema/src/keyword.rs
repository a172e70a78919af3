//! # Keyword Registry
//!
//! [`KeywordName`] is the closed set of recognized keywords. Its declaration
//! order is the order in which a schema's top-level validators run, so error
//! lists come out in the same order for every call.
//!
//! [`Keyword`] is the decoded validator for one keyword. Decoding looks at a
//! single keyword value in isolation; cross-keyword state is filled in
//! afterwards by [`link`](crate::link::link).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{CompileError, ValidationError};
use crate::keywords::array::{Items, MaxItems, MinItems};
use crate::keywords::combinator::{AllOf, AnyOf, Not, OneOf};
use crate::keywords::container::{Definitions, Opaque, Ref};
use crate::keywords::literal::{Enum, Type};
use crate::keywords::numeric::{Maximum, Minimum, MultipleOf};
use crate::keywords::object::{
    Dependencies, MaxProperties, MinProperties, PatternProperties, Properties, Required,
};
use crate::keywords::string::{FormatKeyword, MaxLength, MinLength, Pattern};

/// Keywords read only by the linker as modifiers of another keyword.
pub(crate) const SIBLING_KEYWORDS: [&str; 4] = [
    "exclusiveMinimum",
    "exclusiveMaximum",
    "additionalItems",
    "additionalProperties",
];

/// A recognized keyword name. Variant order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum KeywordName {
    Minimum,
    Maximum,
    MultipleOf,
    MaxLength,
    MinLength,
    Pattern,
    Format,
    MaxItems,
    MinItems,
    Items,
    MaxProperties,
    MinProperties,
    Properties,
    PatternProperties,
    Dependencies,
    Required,
    AllOf,
    AnyOf,
    OneOf,
    Not,
    Enum,
    Definitions,
    Type,
    Ref,
}

impl KeywordName {
    pub(crate) const ALL: [KeywordName; 24] = [
        Self::Minimum,
        Self::Maximum,
        Self::MultipleOf,
        Self::MaxLength,
        Self::MinLength,
        Self::Pattern,
        Self::Format,
        Self::MaxItems,
        Self::MinItems,
        Self::Items,
        Self::MaxProperties,
        Self::MinProperties,
        Self::Properties,
        Self::PatternProperties,
        Self::Dependencies,
        Self::Required,
        Self::AllOf,
        Self::AnyOf,
        Self::OneOf,
        Self::Not,
        Self::Enum,
        Self::Definitions,
        Self::Type,
        Self::Ref,
    ];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::MultipleOf => "multipleOf",
            Self::MaxLength => "maxLength",
            Self::MinLength => "minLength",
            Self::Pattern => "pattern",
            Self::Format => "format",
            Self::MaxItems => "maxItems",
            Self::MinItems => "minItems",
            Self::Items => "items",
            Self::MaxProperties => "maxProperties",
            Self::MinProperties => "minProperties",
            Self::Properties => "properties",
            Self::PatternProperties => "patternProperties",
            Self::Dependencies => "dependencies",
            Self::Required => "required",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::Not => "not",
            Self::Enum => "enum",
            Self::Definitions => "definitions",
            Self::Type => "type",
            Self::Ref => "$ref",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

/// A decoded keyword validator.
#[derive(Debug, Clone)]
pub(crate) enum Keyword {
    Minimum(Minimum),
    Maximum(Maximum),
    MultipleOf(MultipleOf),
    MaxLength(MaxLength),
    MinLength(MinLength),
    Pattern(Pattern),
    Format(FormatKeyword),
    MaxItems(MaxItems),
    MinItems(MinItems),
    Items(Items),
    MaxProperties(MaxProperties),
    MinProperties(MinProperties),
    Properties(Properties),
    PatternProperties(PatternProperties),
    Dependencies(Dependencies),
    Required(Required),
    AllOf(AllOf),
    AnyOf(AnyOf),
    OneOf(OneOf),
    Not(Not),
    Enum(Enum),
    Definitions(Definitions),
    Type(Type),
    Ref(Ref),
    Opaque(Opaque),
}

impl Keyword {
    /// Decode one recognized keyword from its raw value.
    pub(crate) fn decode(name: KeywordName, raw: &Value) -> Result<Self, CompileError> {
        Ok(match name {
            KeywordName::Minimum => Self::Minimum(Minimum::decode(raw)?),
            KeywordName::Maximum => Self::Maximum(Maximum::decode(raw)?),
            KeywordName::MultipleOf => Self::MultipleOf(MultipleOf::decode(raw)?),
            KeywordName::MaxLength => Self::MaxLength(MaxLength::decode(raw)?),
            KeywordName::MinLength => Self::MinLength(MinLength::decode(raw)?),
            KeywordName::Pattern => Self::Pattern(Pattern::decode(raw)?),
            KeywordName::Format => Self::Format(FormatKeyword::decode(raw)?),
            KeywordName::MaxItems => Self::MaxItems(MaxItems::decode(raw)?),
            KeywordName::MinItems => Self::MinItems(MinItems::decode(raw)?),
            KeywordName::Items => Self::Items(Items::decode(raw)?),
            KeywordName::MaxProperties => Self::MaxProperties(MaxProperties::decode(raw)?),
            KeywordName::MinProperties => Self::MinProperties(MinProperties::decode(raw)?),
            KeywordName::Properties => Self::Properties(Properties::decode(raw)?),
            KeywordName::PatternProperties => {
                Self::PatternProperties(PatternProperties::decode(raw)?)
            }
            KeywordName::Dependencies => Self::Dependencies(Dependencies::decode(raw)?),
            KeywordName::Required => Self::Required(Required::decode(raw)?),
            KeywordName::AllOf => Self::AllOf(AllOf::decode(raw)?),
            KeywordName::AnyOf => Self::AnyOf(AnyOf::decode(raw)?),
            KeywordName::OneOf => Self::OneOf(OneOf::decode(raw)?),
            KeywordName::Not => Self::Not(Not::decode(raw)?),
            KeywordName::Enum => Self::Enum(Enum::decode(raw)?),
            KeywordName::Definitions => Self::Definitions(Definitions::decode(raw)?),
            KeywordName::Type => Self::Type(Type::decode(raw)?),
            KeywordName::Ref => Self::Ref(Ref::decode(raw)?),
        })
    }

    /// The keyword name as written in the schema.
    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Minimum(_) => KeywordName::Minimum.as_str(),
            Self::Maximum(_) => KeywordName::Maximum.as_str(),
            Self::MultipleOf(_) => KeywordName::MultipleOf.as_str(),
            Self::MaxLength(_) => KeywordName::MaxLength.as_str(),
            Self::MinLength(_) => KeywordName::MinLength.as_str(),
            Self::Pattern(_) => KeywordName::Pattern.as_str(),
            Self::Format(_) => KeywordName::Format.as_str(),
            Self::MaxItems(_) => KeywordName::MaxItems.as_str(),
            Self::MinItems(_) => KeywordName::MinItems.as_str(),
            Self::Items(_) => KeywordName::Items.as_str(),
            Self::MaxProperties(_) => KeywordName::MaxProperties.as_str(),
            Self::MinProperties(_) => KeywordName::MinProperties.as_str(),
            Self::Properties(_) => KeywordName::Properties.as_str(),
            Self::PatternProperties(_) => KeywordName::PatternProperties.as_str(),
            Self::Dependencies(_) => KeywordName::Dependencies.as_str(),
            Self::Required(_) => KeywordName::Required.as_str(),
            Self::AllOf(_) => KeywordName::AllOf.as_str(),
            Self::AnyOf(_) => KeywordName::AnyOf.as_str(),
            Self::OneOf(_) => KeywordName::OneOf.as_str(),
            Self::Not(_) => KeywordName::Not.as_str(),
            Self::Enum(_) => KeywordName::Enum.as_str(),
            Self::Definitions(_) => KeywordName::Definitions.as_str(),
            Self::Type(_) => KeywordName::Type.as_str(),
            Self::Ref(_) => KeywordName::Ref.as_str(),
            Self::Opaque(o) => o.name(),
        }
    }

    /// Append every violation of this keyword by `instance` to `errors`.
    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        match self {
            Self::Minimum(k) => k.validate(instance, errors),
            Self::Maximum(k) => k.validate(instance, errors),
            Self::MultipleOf(k) => k.validate(instance, errors),
            Self::MaxLength(k) => k.validate(instance, errors),
            Self::MinLength(k) => k.validate(instance, errors),
            Self::Pattern(k) => k.validate(instance, errors),
            Self::Format(k) => k.validate(instance, errors),
            Self::MaxItems(k) => k.validate(instance, errors),
            Self::MinItems(k) => k.validate(instance, errors),
            Self::Items(k) => k.validate(instance, errors),
            Self::MaxProperties(k) => k.validate(instance, errors),
            Self::MinProperties(k) => k.validate(instance, errors),
            Self::Properties(k) => k.validate(instance, errors),
            Self::PatternProperties(k) => k.validate(instance, errors),
            Self::Dependencies(k) => k.validate(instance, errors),
            Self::Required(k) => k.validate(instance, errors),
            Self::AllOf(k) => k.validate(instance, errors),
            Self::AnyOf(k) => k.validate(instance, errors),
            Self::OneOf(k) => k.validate(instance, errors),
            Self::Not(k) => k.validate(instance, errors),
            Self::Enum(k) => k.validate(instance, errors),
            Self::Type(k) => k.validate(instance, errors),
            Self::Definitions(_) | Self::Ref(_) | Self::Opaque(_) => {}
        }
    }
}

/// Output of the decode phase: every keyword decoded on its own, not yet linked.
#[derive(Debug, Default)]
pub(crate) struct DecodedKeywords {
    pub(crate) known: BTreeMap<KeywordName, Keyword>,
    pub(crate) opaque: Vec<Opaque>,
}

impl DecodedKeywords {
    /// Decode every keyword of a schema object. Sibling-only keywords are
    /// left for the linker.
    pub(crate) fn decode_all(document: &Map<String, Value>) -> Result<Self, CompileError> {
        let mut decoded = Self::default();
        for (name, raw) in document {
            if SIBLING_KEYWORDS.contains(&name.as_str()) {
                continue;
            }
            match KeywordName::from_name(name) {
                Some(known) => {
                    decoded.known.insert(known, Keyword::decode(known, raw)?);
                }
                None => decoded.opaque.push(Opaque::decode(name, raw)),
            }
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for name in KeywordName::ALL {
            assert_eq!(KeywordName::from_name(name.as_str()), Some(name));
        }
        assert_eq!(KeywordName::from_name("additionalItems"), None);
        assert_eq!(KeywordName::from_name("title"), None);
    }

    #[test]
    fn test_evaluation_order_is_declaration_order() {
        let mut sorted = KeywordName::ALL;
        sorted.sort();
        assert_eq!(sorted, KeywordName::ALL);
        assert!(KeywordName::Minimum < KeywordName::Type);
        assert!(KeywordName::Properties < KeywordName::PatternProperties);
    }

    #[test]
    fn test_decode_all_splits_known_and_opaque() {
        let doc = json!({
            "type": "object",
            "required": ["a"],
            "title": "Thing",
            "x-extra": {"type": "string"},
            "additionalProperties": false,
            "exclusiveMinimum": true
        });
        let decoded = DecodedKeywords::decode_all(doc.as_object().unwrap()).unwrap();
        let known: Vec<_> = decoded.known.keys().copied().collect();
        assert_eq!(known, [KeywordName::Required, KeywordName::Type]);
        let opaque: Vec<_> = decoded.opaque.iter().map(Opaque::name).collect();
        assert_eq!(opaque, ["title", "x-extra"]);
    }

    #[test]
    fn test_decode_failure_aborts() {
        let doc = json!({"type": "string", "minLength": -1});
        assert!(DecodedKeywords::decode_all(doc.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_keyword_name_for_opaque() {
        let k = Keyword::Opaque(Opaque::decode("x-vendor", &json!(1)));
        assert_eq!(k.name(), "x-vendor");
        let k = Keyword::decode(KeywordName::Ref, &json!("#/a")).unwrap();
        assert_eq!(k.name(), "$ref");
    }
}
