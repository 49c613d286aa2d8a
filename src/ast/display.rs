use super::node::AstNode;
use std::fmt;

/// A wrapper to display a rule tree as an indented outline.
///
/// Useful when dumping a scenario rule from the CLI or a debugger session.
pub struct DisplayAstNode<'a> {
    pub node: &'a AstNode,
}

impl<'a> fmt::Display for DisplayAstNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(self.node, f, "", true)
    }
}

impl<'a> DisplayAstNode<'a> {
    /// Recursively formats the tree, positional children first, then named
    /// children in sorted key order so the output is stable.
    fn fmt_as_tree(
        &self,
        node: &AstNode,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let line_prefix = if prefix.is_empty() { "" } else { prefix };
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", line_prefix, node_marker)?;

        match (&node.name, &node.constant) {
            (Some(name), _) => writeln!(f, "{}", name)?,
            (None, Some(constant)) => writeln!(f, "Constant: {}", constant)?,
            (None, None) => writeln!(f, "<empty>")?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

        let mut named: Vec<(&String, &AstNode)> = node.named_children.iter().collect();
        named.sort_by(|a, b| a.0.cmp(b.0));

        let total = node.children.len() + named.len();
        for (index, child) in node.children.iter().enumerate() {
            self.fmt_as_tree(child, f, &child_prefix, index + 1 == total)?;
        }
        for (offset, (key, child)) in named.into_iter().enumerate() {
            let is_last_child = node.children.len() + offset + 1 == total;
            let key_marker = if is_last_child { "└── " } else { "├── " };
            writeln!(f, "{}{}{}:", child_prefix, key_marker, key)?;
            let key_prefix = format!(
                "{}{}",
                child_prefix,
                if is_last_child { "    " } else { "│   " }
            );
            self.fmt_as_tree(child, f, &key_prefix, true)?;
        }
        Ok(())
    }
}
