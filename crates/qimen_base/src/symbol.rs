//! Common behaviour of the symbols placed on a board.

/// A symbol that can occupy a palace on one of the board layers.
pub trait Symbol: Copy + Eq + 'static {
    /// Chinese glyph as written on the board.
    fn glyph(self) -> &'static str;

    /// Romanized name.
    fn name(self) -> &'static str;
}

/// Find a symbol by glyph or by romanized name (ASCII case-insensitive).
pub fn find_by_label<T: Symbol>(all: &[T], label: &str) -> Option<T> {
    let label = label.trim();
    all.iter()
        .copied()
        .find(|s| s.glyph() == label || s.name().eq_ignore_ascii_case(label))
}

/// Serialize a symbol as its glyph.
macro_rules! serialize_as_glyph {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str($crate::symbol::Symbol::glyph(*self))
                }
            }
        )+
    };
}

pub(crate) use serialize_as_glyph;
