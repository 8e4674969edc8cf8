// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protocol constants and codec configuration.
//!
//! - **Static**: WAMP constants (subprotocol names, ID range)
//! - **Dynamic**: [`CodecConfig`], validated before use

use crate::error::WampError;

// =======================================================================
// WAMP v2 constants
// =======================================================================

/// WebSocket subprotocol for JSON serialization.
pub const WAMP_SUBPROTOCOL_JSON: &str = "wamp.2.json";

/// WebSocket subprotocol for MessagePack serialization.
pub const WAMP_SUBPROTOCOL_MSGPACK: &str = "wamp.2.msgpack";

/// WebSocket subprotocol for CBOR serialization.
pub const WAMP_SUBPROTOCOL_CBOR: &str = "wamp.2.cbor";

/// Largest ID a WAMP peer may assign (2^53, exactly representable as f64).
pub const MAX_ID: u64 = 1 << 53;

/// Default maximum nesting depth of DICT/LIST field values.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// =======================================================================
// CodecConfig
// =======================================================================

/// Configuration for [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Drop trailing optional fields that hold their default (default: false).
    pub omit_trailing_defaults: bool,
    /// Maximum DICT/LIST nesting depth accepted (default: 64).
    pub max_depth: usize,
    /// Restrict ID fields to the WAMP range `0..=2^53` (default: false).
    pub strict_ids: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            omit_trailing_defaults: false,
            max_depth: DEFAULT_MAX_DEPTH,
            strict_ids: false,
        }
    }
}

impl CodecConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable trailing-default omission on encode.
    pub fn omit_trailing_defaults(mut self, enabled: bool) -> Self {
        self.omit_trailing_defaults = enabled;
        self
    }

    /// Set the maximum container nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable the WAMP ID range check.
    pub fn strict_ids(mut self, enabled: bool) -> Self {
        self.strict_ids = enabled;
        self
    }

    /// Validate configuration. Returns Ok(()) if valid.
    pub fn validate(&self) -> Result<(), WampError> {
        if self.max_depth == 0 {
            return Err(WampError::Config("max_depth must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CodecConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.omit_trailing_defaults);
        assert!(!config.strict_ids);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = CodecConfig::new().max_depth(0).validate().unwrap_err();
        assert_eq!(err, WampError::Config("max_depth must be > 0".into()));
    }

    #[test]
    fn test_max_id_is_2_pow_53() {
        assert_eq!(MAX_ID, 9_007_199_254_740_992);
    }
}
