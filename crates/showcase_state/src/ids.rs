use std::fmt::Debug;

use thiserror::Error;

/// An identifier drawn from a fixed, declared set.
///
/// Implementations are generated by [`selection_ids!`](crate::selection_ids),
/// which derives the enum, its `ALL` list, keys and labels from a single
/// declaration. Trigger lists are built from `ALL`, so a trigger can only
/// ever name a declared id.
pub trait SelectionId: Copy + Eq + Debug + 'static {
    /// Every declared id, in declaration order. Never empty.
    const ALL: &'static [Self];

    /// Human readable name of the id set, used in parse errors.
    const KIND: &'static str;

    /// Stable key of this id (e.g. `"buttons"` or `"item-1"`).
    fn key(&self) -> &'static str;

    /// Display label for the trigger of this id.
    fn label(&self) -> &'static str;

    /// Position of this id within [`SelectionId::ALL`].
    fn index(&self) -> usize;

    /// The first declared id.
    fn first() -> Self {
        Self::ALL[0]
    }
}

/// Returned when a key does not name any declared id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} key \"{key}\"")]
pub struct UnknownSelectionKey {
    /// The id set that was searched.
    pub kind: &'static str,
    /// The key that failed to match.
    pub key: String,
}

/// Looks up the declared id whose key equals `key`.
pub fn parse_key<T: SelectionId>(key: &str) -> Result<T, UnknownSelectionKey> {
    T::ALL
        .iter()
        .copied()
        .find(|id| id.key() == key)
        .ok_or_else(|| UnknownSelectionKey {
            kind: T::KIND,
            key: key.to_string(),
        })
}

/// Declares a closed set of selection ids.
///
/// ```
/// showcase_state::selection_ids! {
///     /// Panes of a settings dialog.
///     pub enum Pane: "pane" {
///         /// General settings.
///         General => ("general", "General"),
///         /// Advanced settings.
///         Advanced => ("advanced", "Advanced"),
///     }
/// }
///
/// use showcase_state::SelectionId;
///
/// assert_eq!(Pane::ALL, &[Pane::General, Pane::Advanced]);
/// assert_eq!(Pane::Advanced.key(), "advanced");
/// assert_eq!("general".parse::<Pane>(), Ok(Pane::General));
/// ```
#[macro_export]
macro_rules! selection_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($key:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::SelectionId for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const KIND: &'static str = $kind;

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownSelectionKey;

            fn from_str(key: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::parse_key(key)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::SelectionId::key(self))
            }
        }
    };
}
