use crate::types::TypeMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
}

impl Mark {
    pub const ALL: [Mark; 4] = [Mark::Bold, Mark::Italic, Mark::Strikethrough, Mark::InlineCode];

    /// Property name written on text leaves for this mark.
    pub fn key(self, types: &TypeMap) -> &str {
        match self {
            Mark::Bold => types.strong_mark.as_str(),
            Mark::Italic => types.emphasis_mark.as_str(),
            Mark::Strikethrough => types.delete_mark.as_str(),
            Mark::InlineCode => types.inline_code.as_str(),
        }
    }
}

/// Inline marks active at a point of descent. Passed by value; a child
/// context is always a superset of its parent's.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Decoration {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub inline_code: bool,
}

impl Decoration {
    pub fn with(mut self, mark: Mark) -> Self {
        match mark {
            Mark::Bold => self.bold = true,
            Mark::Italic => self.italic = true,
            Mark::Strikethrough => self.strikethrough = true,
            Mark::InlineCode => self.inline_code = true,
        }
        self
    }

    pub fn has(self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Strikethrough => self.strikethrough,
            Mark::InlineCode => self.inline_code,
        }
    }

    /// Resolved property names of the active marks, in [`Mark::ALL`] order.
    pub fn keys(self, types: &TypeMap) -> Vec<String> {
        Mark::ALL
            .into_iter()
            .filter(|mark| self.has(*mark))
            .map(|mark| mark.key(types).to_string())
            .collect()
    }
}
