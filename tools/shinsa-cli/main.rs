use clap::Parser;
use shinsa::ast::{self, DisplayAstNode};
use shinsa::prelude::*;
use std::fs;

/// Inspect a scenario rule AST: canonicalize it, show its tree, its
/// identifiers and how each operand would be classified.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the rule AST JSON file
    rule_path: String,

    /// Free-text input to run through literal coercion
    #[arg(short, long)]
    coerce: Option<String>,

    /// Print the serialized wire payload after the round trip
    #[arg(long)]
    emit: bool,
}

fn main() {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.rule_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read rule file '{}': {}", &cli.rule_path, e))
    });
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to parse rule JSON: {}", e))
    });

    // Lenient parse: a partially broken payload still yields a tree.
    let rule = ast::dto::parse_json(&document);
    let canonical = normalize(rule);

    println!("Canonical rule tree:");
    print!("{}", DisplayAstNode { node: &canonical });

    let accessors = collect_accessors(&canonical);
    let resolver = IdentifierResolver::new(accessors);
    let identifiers = resolver.identifiers();
    if !identifiers.is_empty() {
        println!("\nIdentifiers:");
        for identifier in &identifiers {
            if identifier.tooltip.is_empty() {
                println!("  {}", identifier.label);
            } else {
                println!("  {} {}", identifier.label, identifier.tooltip);
            }
        }
    }

    println!("\nOperand classification:");
    let context = OperandContext::default();
    for (index, disjunct) in canonical.children.iter().enumerate() {
        for (offset, clause) in disjunct.children.iter().enumerate() {
            println!(
                "  disjunct {} clause {}: {:?}",
                index,
                offset,
                classify(clause, &context)
            );
        }
    }

    if let Some(input) = &cli.coerce {
        println!("\nCoercion candidates for {:?}:", input);
        let candidates = coerce_to_constants(input);
        if candidates.is_empty() {
            println!("  (none)");
        }
        for candidate in candidates {
            println!("  {} {}", candidate.label, candidate.tooltip);
        }
    }

    if cli.emit {
        let dto = ast::dto::serialize(&canonical);
        let payload = serde_json::to_string_pretty(&dto)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize rule: {}", e)));
        println!("\nWire payload:\n{}", payload);
    }
}

/// Collects every data-accessor node in the tree, in traversal order.
fn collect_accessors(node: &AstNode) -> Vec<AstNode> {
    fn walk(node: &AstNode, out: &mut Vec<AstNode>) {
        if let Some(kind) = OperatorKind::of(node) {
            if kind.is_accessor() {
                out.push(node.clone());
            }
        }
        for child in &node.children {
            walk(child, out);
        }
        for child in node.named_children.values() {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(node, &mut out);
    out
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
