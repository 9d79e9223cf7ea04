// tvp-common/src/catalog.rs
//! Built-in patch table for the Claude Code `cli.js` bundle.
//!
//! Every literal here is copied verbatim from the targeted bundle. A newer
//! bundle that renames any minified identifier will classify the affected
//! entry as not found rather than fail.

use crate::model::PatchSpec;

/// Bundle version the literals below were taken from.
pub const TARGET_VERSION: &str = "2.0.13";

const BANNER_SEARCH: &str = r#"function hGB({streamMode:A}){let[B,Q]=RX1.useState(null),[Z,G]=RX1.useState(null);if(RX1.useEffect(()=>{if(A==="thinking"&&B===null)Q(Date.now());else if(A!=="thinking"&&B!==null)G(Date.now()-B),Q(null)},[A,B]),A==="thinking")return TL.createElement(j,{marginTop:1},TL.createElement($,{dimColor:!0},"∴ Thinking…"));if(Z!==null)return TL.createElement(j,{marginTop:1},TL.createElement($,{dimColor:!0},"∴ Thought for ",Math.max(1,Math.round(Z/1000)),"s"," ",TL.createElement($,{dimColor:!0,bold:!0},"(ctrl+o")," ","to show thinking)"));return null}"#;
const BANNER_REPLACEMENT: &str = r#"function hGB({streamMode:A}){return null}"#;

const VISIBILITY_SEARCH: &str = r#"case"thinking":if(!D)return null;if(K)return null;return z3.createElement(xlB,{addMargin:B,param:A,isTranscriptMode:D});"#;
const VISIBILITY_REPLACEMENT: &str = r#"case"thinking":if(K)return null;return z3.createElement(xlB,{addMargin:B,param:A,isTranscriptMode:!0});"#;

/// Patches applied by a default run, in application order.
pub fn builtin_patches() -> Vec<PatchSpec> {
    vec![
        PatchSpec::new(
            "banner",
            "hGB banner removal",
            BANNER_SEARCH,
            BANNER_REPLACEMENT,
        )
        .with_applied_message("hGB function now returns null"),
        PatchSpec::new(
            "visibility",
            "Thinking visibility",
            VISIBILITY_SEARCH,
            VISIBILITY_REPLACEMENT,
        )
        .with_applied_message("thinking content forced visible"),
    ]
}
