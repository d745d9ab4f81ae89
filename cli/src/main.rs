mod corpus;

use anyhow::Result;
use clap::{Parser, Subcommand};
use search_core::{paginate, DocumentStatus, MatchedDocument, RequestQueue, SearchServer};
use tracing_subscriber::{EnvFilter, fmt};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Rank documents against keyword queries with stop words and minus words", long_about = None)]
struct Cli {
    /// Input path (file or directory) of JSON/JSONL documents
    #[arg(long)]
    input: String,
    /// Space separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query, page by page
    Search {
        query: String,
        /// Only documents with this status
        #[arg(long, default_value_t = DocumentStatus::Actual)]
        status: DocumentStatus,
        /// Only documents rated at least this much
        #[arg(long)]
        min_rating: Option<i32>,
        #[arg(long, default_value_t = 2)]
        page_size: usize,
    },
    /// Print the query words found in every document
    Match { query: String },
    /// Replay queries from a file (one per line) and count those that found nothing
    Stats {
        #[arg(long)]
        queries: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut server = SearchServer::new(&cli.stop_words)?;
    let stats = corpus::load_corpus(&mut server, Path::new(&cli.input))?;
    tracing::info!(
        added = stats.added,
        rejected = stats.rejected,
        stop_words = server.stop_words().len(),
        "loaded corpus"
    );

    match cli.command {
        Commands::Search { query, status, min_rating, page_size } => {
            search(&server, &query, status, min_rating, page_size)
        }
        Commands::Match { query } => match_documents(&server, &query),
        Commands::Stats { queries } => request_stats(&server, &queries),
    }
}

fn search(server: &SearchServer, query: &str, status: DocumentStatus, min_rating: Option<i32>, page_size: usize) -> Result<()> {
    println!("Search results for query: {query}");
    let found = match min_rating {
        Some(min) => server.find_top_documents_with(query, |_, s, rating| s == status && rating >= min),
        None => server.find_top_documents_by_status(query, status),
    };
    let found = match found {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(query, error = %e, "search failed");
            return Ok(());
        }
    };
    for page in &paginate(&found, page_size) {
        println!("{page}");
        println!("Page break");
    }
    Ok(())
}

fn match_documents(server: &SearchServer, query: &str) -> Result<()> {
    println!("Matching documents for query: {query}");
    for document_id in server.document_ids() {
        match server.match_document(query, document_id) {
            Ok((words, status)) => println!("{}", MatchedDocument { document_id, words, status }),
            Err(e) => {
                tracing::warn!(query, document_id, error = %e, "match failed");
                break;
            }
        }
    }
    Ok(())
}

fn request_stats(server: &SearchServer, queries: &str) -> Result<()> {
    let reader = BufReader::new(File::open(queries)?);
    let mut queue = RequestQueue::new(server);
    for line in reader.lines() {
        let line = line?;
        if let Err(e) = queue.add_find_request(&line) {
            tracing::warn!(query = %line, error = %e, "request rejected");
        }
    }
    println!("Total empty requests: {}", queue.no_result_requests());
    Ok(())
}
