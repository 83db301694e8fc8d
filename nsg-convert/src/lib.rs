//! Declarative firewall rule conversion for Azure network security groups.
//!
//! Users describe allow rules with a small, provider-neutral shape
//! ([`model::SecurityRule`]). This crate translates each rule into the payload
//! the Azure networking API expects ([`armnet_core::SecurityRule`]) and
//! provides the tooling around that translation.
//!
//! ## Conversion
//!
//! - [`model`]: Declarative rule types
//! - [`converters`]: Rule translation and the protocol/direction lookup tables
//!
//! ## Rule sets
//!
//! - [`ruleset`]: Load rule sets from TOML or JSON files
//! - [`verify`]: Pre-flight checks (unrecognized values, duplicate names,
//!   priority clashes)
//!
//! ## Reporting
//!
//! - [`conversion_summary`]: Post-conversion counts
//! - [`report`]: Terminal-friendly colored output
//!
//! # Examples
//!
//! ```
//! use nsg_convert::converters::security_rule_to_sdk;
//! use nsg_convert::model::{SecurityGroupProtocol, SecurityRule, SecurityRuleDirection};
//!
//! let rule = SecurityRule {
//!     priority: 100,
//!     destination_ports: Some("22".to_string()),
//!     ..SecurityRule::new("allow-ssh", SecurityGroupProtocol::TCP, SecurityRuleDirection::INBOUND)
//! };
//! let converted = security_rule_to_sdk(&rule).expect("recognized protocol and direction");
//! assert_eq!(converted.name.as_deref(), Some("allow-ssh"));
//! ```

pub mod conversion_summary;
pub mod converters;
pub mod model;
pub mod report;
pub mod ruleset;
pub mod verify;
