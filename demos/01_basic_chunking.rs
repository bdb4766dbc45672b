//! Basic Text Chunking
//!
//! The minimal example: cut a script into chunks for a TTS request limit.
//!
//! ```bash
//! cargo run --example 01_basic_chunking
//! ```

use cleave::{chunk_text, ChunkSettings};

fn main() -> Result<(), cleave::Error> {
    let script = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        Dr. Hinton once said, \"It's all about the representations.\" \
        Deep learning extends this with multiple hidden layers... \
        Each layer learns increasingly abstract representations.";

    let result = chunk_text(script, &ChunkSettings::new(120))?;

    println!("Script: {} chars", script.chars().count());
    println!("Chunks: {}\n", result.chunks.len());

    for chunk in &result.chunks {
        println!(
            "[{}] {} chars, {} sentences: \"{}\"",
            chunk.id, chunk.character_count, chunk.sentence_count, chunk.content
        );
    }

    // Each chunk fits one request and ends at a sentence boundary.
    println!(
        "\naverage {} / largest {} / smallest {}",
        result.stats.average_chunk_size, result.stats.largest_chunk, result.stats.smallest_chunk
    );

    Ok(())
}
