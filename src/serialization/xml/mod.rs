/*!
 * XML Codec Adapters
 */

pub mod options;
pub mod quick;

pub use options::{TextEncoding, XmlOptions};
pub use quick::QuickXmlCodec;
