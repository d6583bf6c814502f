use clap::Parser;
use jsonpeek::{parse, Node};
use std::{
  fs,
  io::{self, Read},
  process::exit,
};

/// Check JSON input and peek at values inside it
#[derive(Debug, Parser, PartialEq)]
#[command(version)]
struct Args {
  /// Member key to look up; repeat to descend into nested objects
  #[arg(long, value_name = "KEY")]
  get: Vec<String>,

  /// File to process, otherwise uses stdin
  file: Option<String>,
}

fn main() -> io::Result<()> {
  run(Args::parse())
}

fn run(args: Args) -> io::Result<()> {
  let mut input: String;
  if let Some(path) = args.file.as_ref() {
    input = fs::read_to_string(path)?;
  } else {
    input = String::new();
    io::stdin().read_to_string(&mut input)?;
  }

  match parse(&input) {
    Ok(root) => {
      let mut node = &root;
      for key in &args.get {
        match node.find(key) {
          Some(child) => node = child,
          None => {
            eprintln!("key not found: {}", key);
            exit(1);
          }
        }
      }
      println!("{}", describe(node));
    }
    Err(e) => {
      eprintln!("{}", e);
      exit(1);
    }
  }

  Ok(())
}

fn describe(node: &Node) -> String {
  match node {
    Node::Leaf(raw) => (*raw).to_owned(),
    Node::Object(members) => format!("object with {} members", members.len()),
    Node::Array(items) => format!("array with {} elements", items.len()),
  }
}
