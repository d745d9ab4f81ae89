use anyhow::Result;
use search_core::{DocumentStatus, SearchServer};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub added: usize,
    pub rejected: usize,
}

/// Collect `.json` / `.jsonl` files under `input`, in path order.
pub fn corpus_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

/// Add every document under `input` to `server`. Malformed JSON aborts;
/// documents the server rejects are logged and skipped.
pub fn load_corpus(server: &mut SearchServer, input: &Path) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    for file in corpus_files(input) {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(server, &file, &mut stats)?;
        } else {
            load_json(server, &file, &mut stats)?;
        }
    }
    Ok(stats)
}

fn load_jsonl(server: &mut SearchServer, file: &Path, stats: &mut LoadStats) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)?;
        ingest_doc(server, doc, stats);
    }
    Ok(())
}

fn load_json(server: &mut SearchServer, file: &Path, stats: &mut LoadStats) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                ingest_doc(server, doc, stats);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            ingest_doc(server, doc, stats);
        }
        _ => tracing::warn!(file = %file.display(), "expected a document or an array of documents"),
    }
    Ok(())
}

fn ingest_doc(server: &mut SearchServer, doc: InputDoc, stats: &mut LoadStats) {
    match server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
        Ok(()) => stats.added += 1,
        Err(e) => {
            tracing::warn!(document_id = doc.id, error = %e, "failed to add document");
            stats.rejected += 1;
        }
    }
}
