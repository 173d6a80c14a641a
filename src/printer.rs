//! Text rendering of a `ProcessTree`.

use std::io::{self, Write};

use crate::process::Process;
use crate::process::tree::{NodeId, ProcessTree};

/// Written once per depth level in front of a node.
pub const INDENT: &str = "|   ";

/// Written in front of every process name.
pub const NODE_MARKER: &str = "+-";

/// Writes the tree depth-first, pre-order, straight to `out`.
pub struct TreePrinter<'a, W: Write> {
    out: W,
    indent: &'a str,
}

impl<'a, W: Write> TreePrinter<'a, W> {
    pub fn new(out: W, indent: &'a str) -> Self {
        TreePrinter { out, indent }
    }

    pub fn print_summary(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Number of Running Processes = {count}")
    }

    /// `+-<name> (<id>) (<parent id>)`
    pub fn print_node(&mut self, process: &Process) -> io::Result<()> {
        writeln!(
            self.out,
            "{NODE_MARKER}{} ({}) ({})",
            process.name, process.process_id, process.parent_id
        )
    }

    pub fn print_tree(&mut self, tree: &ProcessTree, root: NodeId, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            self.out.write_all(self.indent.as_bytes())?;
        }
        self.print_node(&tree[root].process)?;

        // Render children
        for &child in &tree[root].children {
            self.print_tree(tree, child, depth + 1)?;
        }
        Ok(())
    }

    /// Prints every root of `tree` at depth 0.
    pub fn print_forest(&mut self, tree: &ProcessTree) -> io::Result<()> {
        for &root in tree.roots() {
            self.print_tree(tree, root, 0)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;
    use crate::process::tree::RootPolicy;

    fn build(policy: RootPolicy, entries: &[(&str, u32, u32)]) -> ProcessTree {
        let mut tree = ProcessTree::new(policy);
        for &(name, pid, ppid) in entries {
            tree.attach(ProcessDescriptor::new(name, pid, ppid).into());
        }
        tree
    }

    fn render(tree: &ProcessTree) -> String {
        let mut printer = TreePrinter::new(Vec::new(), INDENT);
        printer.print_forest(tree).expect("write to vec");
        String::from_utf8(printer.finish().expect("flush")).expect("utf8")
    }

    #[test]
    fn node_line_has_name_id_and_parent() {
        let mut printer = TreePrinter::new(Vec::new(), INDENT);
        printer
            .print_node(&ProcessDescriptor::new("sshd", 600, 1).into())
            .expect("write");

        let out = printer.finish().expect("flush");
        assert_eq!(String::from_utf8(out).expect("utf8"), "+-sshd (600) (1)\n");
    }

    #[test]
    fn chain_is_indented_per_depth() {
        let tree = build(
            RootPolicy::FirstSeen,
            &[("init", 1, 0), ("shell", 2, 1), ("ls", 3, 2)],
        );

        assert_eq!(
            render(&tree),
            "+-init (1) (0)\n|   +-shell (2) (1)\n|   |   +-ls (3) (2)\n"
        );
    }

    #[test]
    fn single_process_renders_one_line() {
        let tree = build(RootPolicy::FirstSeen, &[("lonely", 314, 271)]);
        assert_eq!(render(&tree), "+-lonely (314) (271)\n");

        let tree = build(RootPolicy::FirstSeen, &[("idle", 0, 0)]);
        assert_eq!(render(&tree), "+-idle (0) (0)\n");
    }

    #[test]
    fn orphan_renders_one_level_below_root() {
        let tree = build(
            RootPolicy::FirstSeen,
            &[("init", 1, 0), ("shell", 2, 1), ("stray", 50, 4242)],
        );

        assert_eq!(
            render(&tree),
            "+-init (1) (0)\n|   +-shell (2) (1)\n|   +-stray (50) (4242)\n"
        );
    }

    #[test]
    fn child_before_parent_uses_first_record_as_root() {
        let tree = build(
            RootPolicy::FirstSeen,
            &[("orphanChild", 5, 9), ("init", 1, 0)],
        );

        assert_eq!(render(&tree), "+-orphanChild (5) (9)\n|   +-init (1) (0)\n");
    }

    #[test]
    fn forest_prints_each_root_at_depth_zero() {
        let tree = build(
            RootPolicy::Forest,
            &[("orphanChild", 5, 9), ("init", 1, 0), ("shell", 2, 1)],
        );

        assert_eq!(
            render(&tree),
            "+-orphanChild (5) (9)\n+-init (1) (0)\n|   +-shell (2) (1)\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let entries = [
            ("init", 1, 0),
            ("kthreadd", 2, 0),
            ("sshd", 600, 1),
            ("bash", 601, 600),
            ("kworker", 7, 2),
            ("vim", 602, 601),
        ];

        let first = render(&build(RootPolicy::FirstSeen, &entries));
        let second = render(&build(RootPolicy::FirstSeen, &entries));
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn custom_indent_token_is_used() {
        let tree = build(RootPolicy::FirstSeen, &[("init", 1, 0), ("sh", 2, 1)]);
        let mut printer = TreePrinter::new(Vec::new(), "..");
        printer.print_tree(&tree, 0, 0).expect("write");

        let out = String::from_utf8(printer.finish().expect("flush")).expect("utf8");
        assert_eq!(out, "+-init (1) (0)\n..+-sh (2) (1)\n");
    }

    #[test]
    fn summary_line_format() {
        let mut printer = TreePrinter::new(Vec::new(), INDENT);
        printer.print_summary(3).expect("write");

        let out = String::from_utf8(printer.finish().expect("flush")).expect("utf8");
        assert_eq!(out, "Number of Running Processes = 3\n");
    }
}
