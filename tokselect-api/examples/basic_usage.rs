//! Basic usage of the token selection API

use tokselect_api::{keep_tokens, Config, Input, CorpusFormat, Mode, TokenSelector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ngrams = vec![vec![1, 2], vec![5, 6], vec![10], vec![15], vec![20]];
    let corpus: Vec<Vec<u32>> = vec![(1..=10).collect(), vec![20, 4, 15]];

    // Method 1: Convenience function
    println!("=== Method 1: Convenience Function ===");
    let kept = keep_tokens(corpus.clone(), &ngrams, true)?;
    for (i, document) in kept.iter().enumerate() {
        println!("  Document {}: {:?}", i + 1, document);
    }

    // Method 2: Windowed selection
    println!("\n=== Method 2: Context Window ===");
    let config = Config::builder()
        .mode(Mode::Keep)
        .padding(true)
        .window(0, 2)
        .build()?;
    let selector = TokenSelector::from_ngrams(&ngrams, config)?;
    let output = selector.select_corpus(corpus.clone())?;
    println!("  {:?}", output.documents[0]);

    // Method 3: Serialized input
    println!("\n=== Method 3: Text Input ===");
    let selector = TokenSelector::from_ngrams(&ngrams, Config::remove())?;
    let output = selector.select(Input::from_text("1 2 3 4\n20 21 22\n", CorpusFormat::Text))?;
    for document in &output.documents {
        println!("  {:?}", document);
    }
    println!(
        "Removed {} of {} tokens in {}ms",
        output.metadata.tokens_in - output.metadata.tokens_out,
        output.metadata.tokens_in,
        output.metadata.processing_time_ms
    );

    Ok(())
}
