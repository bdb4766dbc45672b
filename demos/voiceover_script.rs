//! Voiceover Script Chunking
//!
//! Chunks a script for a voiceover tool with a per-request character limit,
//! first strictly, then with fallback splitting, and prints the exports.
//!
//! ```bash
//! cargo run --example voiceover_script
//! cargo run --example voiceover_script -- path/to/script.txt
//! RUST_LOG=cleave=debug cargo run --example voiceover_script
//! ```

use cleave::{chunk_text, export_with_headers, prepare_multiple_files, ChunkSettings, Error};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"Welcome back to the channel. Today we follow a river from source to sea.

"Every river starts small," says Prof. Alvarez. "Most people never see the spring."

Is it the same river at the end? Maybe... maybe not!

the water keeps moving downhill through meadows and forests and towns without ever stopping to rest and the current carries silt and leaves and the occasional lost sandal all the way down to the delta where the land finally gives up and the sea takes over"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let script = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    // Settings as stored by the host application
    let strict: ChunkSettings = serde_json::from_str(r#"{"maxCharacters": 200}"#)?;

    println!("Strict ({} chars, no fallback)", strict.max_characters());
    println!("-----------------------------------");
    match chunk_text(&script, &strict) {
        Ok(result) => println!("{} chunks\n", result.chunks.len()),
        Err(Error::OversizedUnboundedContent { length, limit, preview }) => {
            println!("rejected: {length} chars without punctuation (limit {limit})");
            println!("  \"{preview}\"\n");
        }
        Err(err) => return Err(err.into()),
    }

    let lenient = strict.with_fallback_split(true);
    let result = chunk_text(&script, &lenient)?;

    println!("With fallback splitting");
    println!("-----------------------");
    println!("{}\n", export_with_headers(&result.chunks));

    println!("Files");
    println!("-----");
    let files = prepare_multiple_files(&result.chunks);
    println!("{}", serde_json::to_string_pretty(&files)?);

    println!("\nStats: {}", serde_json::to_string(&result.stats)?);

    Ok(())
}
