use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

/// A length as written in a theme file: a bare number (pixels) or a string
/// with a `px`, `rem` or `%` suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LengthToken {
    Px(f32),
    Rem(f32),
    Percent(f32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f32),
    Text(String),
}

impl RawLength {
    fn token(self) -> Option<LengthToken> {
        match self {
            RawLength::Number(value) => Some(LengthToken::Px(value)),
            RawLength::Text(text) => parse_length(&text),
        }
    }
}

fn parse_length(text: &str) -> Option<LengthToken> {
    let text = text.trim();

    if let Some(value) = text.strip_suffix("rem") {
        return value.trim().parse().ok().map(LengthToken::Rem);
    }
    if let Some(value) = text.strip_suffix("px") {
        return value.trim().parse().ok().map(LengthToken::Px);
    }
    if let Some(value) = text.strip_suffix('%') {
        return value.trim().parse().ok().map(LengthToken::Percent);
    }

    None
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)?.token() {
        Some(LengthToken::Px(value)) => Ok(px(value)),
        _ => Err(D::Error::custom(
            "expected a number or a string ending with 'px'",
        )),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)?.token() {
        Some(LengthToken::Px(value)) => Ok(AbsoluteLength::Pixels(px(value))),
        Some(LengthToken::Rem(value)) => Ok(AbsoluteLength::Rems(rems(value))),
        _ => Err(D::Error::custom(
            "expected a number or a string ending with 'px' or 'rem'",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)?.token() {
        Some(LengthToken::Px(value)) => Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(
            value,
        )))),
        Some(LengthToken::Rem(value)) => {
            Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))))
        }
        Some(LengthToken::Percent(value)) => Ok(DefiniteLength::Fraction(value / 100.)),
        None => Err(D::Error::custom(
            "expected a number or a string ending with 'px', 'rem' or '%'",
        )),
    }
}

pub fn de_font_family<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(family) => Ok(SmallVec::from_buf([family])),
        OneOrMany::Many(families) if families.is_empty() => {
            Err(D::Error::custom("font family list can't be empty"))
        }
        OneOrMany::Many(families) => Ok(families),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants = SmallVec::<[ThemeVariant; 2]>::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided",
        ));
    }

    Ok(variants)
}
