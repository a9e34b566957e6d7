/*!
 * XML Codec Options
 */

use crate::core::limits::XML_INDENT_WIDTH;

/// Output text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TextEncoding {
    /// UTF-8 without byte-order mark
    #[default]
    Utf8,
}

impl TextEncoding {
    /// Label used in the XML declaration
    pub const fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// XML adapter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XmlOptions {
    pub encoding: TextEncoding,
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="..."?>` before the root element
    pub declaration: bool,
    /// Root element name; defaults to the serialized type's name
    pub root: Option<&'static str>,
}

impl XmlOptions {
    /// UTF-8, two-space indentation, explicit declaration
    pub const INDENTED: XmlOptions = XmlOptions {
        encoding: TextEncoding::Utf8,
        indent: Some(XML_INDENT_WIDTH),
        declaration: true,
        root: None,
    };

    /// Single line, no declaration
    pub const COMPACT: XmlOptions = XmlOptions {
        indent: None,
        declaration: false,
        ..Self::INDENTED
    };

    pub const fn indent(mut self, width: Option<usize>) -> Self {
        self.indent = width;
        self
    }

    pub const fn declaration(mut self, enabled: bool) -> Self {
        self.declaration = enabled;
        self
    }

    pub const fn with_root(mut self, root: &'static str) -> Self {
        self.root = Some(root);
        self
    }

    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self::INDENTED
    }
}
