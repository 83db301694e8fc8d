//! Azure network security rule payloads and their JSON wire encoding.

pub mod format;
pub mod network;
pub mod parser;
pub mod writer;

pub use format::{format_json, format_rule, format_summary, format_text};
pub use network::{
    SecurityGroupProperties, SecurityRule, SecurityRuleAccess, SecurityRuleDirection,
    SecurityRulePropertiesFormat, SecurityRuleProtocol,
};
pub use parser::{parse, parse_file, ParseError};
pub use writer::{write, write_file, WriteError};
