// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering a query's result graph to text.
//!
//! Rendering the `Map<ModuleKey, ResultNode>` a query produces is explicitly out of
//! scope for `modquery` itself: this is the minimal stand-in so the demo CLI has
//! something to print, not a general-purpose presentation layer. Real renderers
//! (`cargo tree`-style, JSON, dot) are left as an exercise for a caller with actual
//! rendering requirements.

use modquery::{Expanded, ModuleKey, ResultNode};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Something that can turn a query's result graph into a displayable form.
pub trait Renderer {
    /// Renders `result` (rooted at [`ModuleKey::root`]) into a string.
    fn render(&self, result: &HashMap<ModuleKey, ResultNode>) -> String;
}

/// Renders the result graph as an indented tree, direct children with a plain prefix and
/// indirect children dotted, the way `cargo tree` or `bazel mod tree` present a
/// dependency tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn write_node(
        &self,
        out: &mut String,
        result: &HashMap<ModuleKey, ResultNode>,
        key: &ModuleKey,
        depth: usize,
        indirect: bool,
        expanded: Expanded,
    ) {
        let indent = "  ".repeat(depth);
        let prefix = if indirect { "... " } else { "" };
        let label = if key.is_root() {
            "<root>".to_string()
        } else {
            key.to_string()
        };

        match expanded {
            Expanded::False => {
                let _ = writeln!(out, "{indent}{prefix}{label} (*)");
            }
            Expanded::True => {
                let node = match result.get(key) {
                    Some(node) => node,
                    None => {
                        let _ = writeln!(out, "{indent}{prefix}{label} (missing)");
                        return;
                    }
                };
                let marker = if node.is_target() { " [target]" } else { "" };
                let _ = writeln!(out, "{indent}{prefix}{label}{marker}");
                for (child, child_exp) in node.children().iter() {
                    self.write_node(out, result, child, depth + 1, false, *child_exp);
                }
                for (child, child_exp) in node.indirect_children().iter() {
                    self.write_node(out, result, child, depth + 1, true, *child_exp);
                }
            }
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, result: &HashMap<ModuleKey, ResultNode>) -> String {
        let mut out = String::new();
        self.write_node(&mut out, result, &ModuleKey::root(), 0, false, Expanded::True);
        out
    }
}
