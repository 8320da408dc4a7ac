use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::prelude::*;
use crate::store::DEFAULT_VOCAB_PATH;

pub const USAGE: &str = r#"wordtok [ learn corpus.txt | encode "text" | decode "[idx, idx, idx]" ]"#;
const LEARN_USAGE: &str = "wordtok learn <CORPUS>";
const ENCODE_USAGE: &str = r#"wordtok encode "text""#;
const DECODE_USAGE: &str = r#"wordtok decode "[idx, idx, idx]""#;

#[derive(Debug, Parser)]
#[command(name = "wordtok", version)]
#[command(about = "Learn a word vocabulary and encode or decode text with it")]
pub struct Args {
    /// Path of the vocabulary JSON file.
    #[clap(long, global = true, env = "WORDTOK_VOCAB", default_value = DEFAULT_VOCAB_PATH)]
    pub vocab: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the vocabulary from a corpus file, overwriting the existing one
    #[command(alias = "train")]
    Learn {
        /// Corpus text file
        corpus: Option<PathBuf>,
    },
    /// Print the token IDs of a text
    Encode {
        /// Text to encode
        #[clap(allow_hyphen_values = true)]
        text: Option<String>,
    },
    /// Print the text of a stringified ID list
    Decode {
        /// IDs such as "[2, 7, 13, 3]"
        #[clap(allow_hyphen_values = true)]
        ids: Option<String>,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn required<T>(value: Option<T>, command: &'static str, usage: &'static str) -> Result<T> {
    value.ok_or(Error::MissingArgument { command, usage })
}

/// Run one invocation and print its result.
pub fn run(args: Args) -> Result<()> {
    let store = FileStore::new(args.vocab);

    match args.command {
        Some(Command::Learn { corpus }) => {
            let corpus = required(corpus, "learn", LEARN_USAGE)?;
            let vocab = commands::learn(&store, &corpus)?;
            println!("Vocabulary learned and saved, Vocabulary size {}", vocab.len());
        }
        Some(Command::Encode { text }) => {
            let text = required(text, "encode", ENCODE_USAGE)?;
            let ids = commands::encode(&store, &text)?;
            println!("Encoded: {ids:?}");
        }
        Some(Command::Decode { ids }) => {
            let ids = required(ids, "decode", DECODE_USAGE)?;
            let text = commands::decode_str(&store, &ids)?;
            println!("Decoded: {text}");
        }
        Some(Command::Other(other)) => {
            log::debug!("unrecognized command {other:?}");
            println!("Usage: {USAGE}");
        }
        None => println!("Usage: {USAGE}"),
    }

    Ok(())
}
