use search_core::{DocumentStatus, ErrorKind, SearchError, SearchServer};

fn pet_server() -> SearchServer {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(0, "белый кот модный ошейник", DocumentStatus::Actual, &[8, -3]).unwrap();
    server.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
    server.add_document(2, "ухоженный пёс выразительные глаза", DocumentStatus::Actual, &[5, -12, 2, 1]).unwrap();
    server
}

fn ids(docs: &[search_core::Document]) -> Vec<i32> {
    docs.iter().map(|d| d.id).collect()
}

#[test]
fn it_counts_added_documents() {
    let mut server = SearchServer::new("").unwrap();
    for id in 0..10 {
        server.add_document(id, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        assert_eq!(server.document_count(), id as usize + 1);
    }
}

#[test]
fn it_excludes_stop_words_from_documents() {
    let mut server = SearchServer::new("in the").unwrap();
    server.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
    assert!(server.find_top_documents("in").unwrap().is_empty());
    let found = server.find_top_documents("cat").unwrap();
    assert_eq!(ids(&found), vec![42]);
}

#[test]
fn it_accepts_stop_word_collections() {
    let server = SearchServer::from_stop_words(vec!["и", "в", "на", "", "в", " "]).unwrap();
    assert_eq!(server.stop_words().len(), 3);
    let err = SearchServer::from_stop_words(["скво\x12рец"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(SearchServer::new("- --cat cat-cat cat--cat").is_ok());
}

#[test]
fn it_rejects_bad_documents() {
    let mut server = SearchServer::new("и в на").unwrap();
    server.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7]).unwrap();

    let duplicate = server.add_document(1, "пушистый пёс и модный ошейник", DocumentStatus::Actual, &[1, 2]);
    assert_eq!(duplicate, Err(SearchError::DuplicateDocumentId { id: 1 }));
    let negative = server.add_document(-1, "пушистый пёс и модный ошейник", DocumentStatus::Actual, &[1, 2]);
    assert_eq!(negative, Err(SearchError::NegativeDocumentId { id: -1 }));
    let control = server.add_document(3, "большой пёс скво\x12рец евгений", DocumentStatus::Actual, &[1, 3, 2]);
    assert_eq!(control, Err(SearchError::InvalidDocumentText { id: 3 }));

    assert_eq!(server.document_count(), 1);
    assert!(server.find_top_documents("пёс").unwrap().is_empty());
}

#[test]
fn it_allows_minus_signs_in_document_text() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(0, "- --cat cat-cat", DocumentStatus::Actual, &[]).unwrap();
    assert_eq!(ids(&server.find_top_documents("cat-cat").unwrap()), vec![0]);
}

#[test]
fn it_computes_tf_idf_relevance() {
    let server = pet_server();
    let found = server.find_top_documents("пушистый ухоженный кот").unwrap();
    assert_eq!(ids(&found), vec![1, 2, 0]);

    let expected = 3f64.ln() * (2.0 / 4.0) + 3f64.ln() * (0.0 / 4.0) + (3.0f64 / 2.0).ln() * (1.0 / 4.0);
    assert!((found[0].relevance - expected).abs() < 1e-9);
    assert!((found[1].relevance - 3f64.ln() * 0.25).abs() < 1e-9);
    assert!((found[2].relevance - 1.5f64.ln() * 0.25).abs() < 1e-9);
    assert_eq!(found[0].rating, 5);
    assert_eq!(found[1].rating, -1);
    assert_eq!(found[2].rating, 2);
}

#[test]
fn it_excludes_documents_with_minus_words() {
    let server = pet_server();
    let found = server.find_top_documents("-пушистый ухоженный кот").unwrap();
    assert_eq!(ids(&found), vec![2, 0]);
}

#[test]
fn it_ignores_unknown_words() {
    let server = pet_server();
    assert!(server.find_top_documents("попугай -жираф").unwrap().is_empty());
    assert_eq!(server.find_top_documents("кот -жираф").unwrap().len(), 2);
}

#[test]
fn it_filters_by_status_and_predicate() {
    let mut server = SearchServer::new("").unwrap();
    let statuses = [DocumentStatus::Actual, DocumentStatus::Irrelevant, DocumentStatus::Banned, DocumentStatus::Removed];
    for (id, status) in statuses.into_iter().enumerate() {
        server.add_document(id as i32, "cat city", status, &[id as i32]).unwrap();
    }
    for (id, status) in statuses.into_iter().enumerate() {
        let found = server.find_top_documents_by_status("cat", status).unwrap();
        assert_eq!(ids(&found), vec![id as i32]);
    }
    assert_eq!(ids(&server.find_top_documents("cat").unwrap()), vec![0]);
    let rated = server.find_top_documents_with("cat", |_, _, rating| rating >= 2).unwrap();
    assert_eq!(ids(&rated), vec![3, 2]);
}

#[test]
fn it_returns_at_most_five_documents() {
    let mut server = SearchServer::new("").unwrap();
    for id in 0..20 {
        server.add_document(id, "cat dog", DocumentStatus::Actual, &[id]).unwrap();
    }
    let found = server.find_top_documents("cat").unwrap();
    assert_eq!(ids(&found), vec![19, 18, 17, 16, 15]);
}

#[test]
fn it_rejects_malformed_queries() {
    let server = pet_server();
    for query in ["-", "--cat", "кот -", "кот --пёс", "ко\x01т", "\x1f"] {
        let err = server.find_top_documents(query).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "query {query:?}");
        let err = server.match_document(query, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "query {query:?}");
    }
    assert!(server.find_top_documents("cat-cat").is_ok());
    assert!(server.find_top_documents("cat--cat").is_ok());
    assert!(server.match_document("cat-cat", 0).is_ok());
    assert!(server.match_document("cat--cat", 0).is_ok());
}

#[test]
fn it_enumerates_documents_in_insertion_order() {
    let mut server = SearchServer::new("").unwrap();
    for id in [5, 1, 3] {
        server.add_document(id, "cat", DocumentStatus::Actual, &[]).unwrap();
    }
    assert_eq!(server.document_id(0), Ok(5));
    assert_eq!(server.document_id(1), Ok(1));
    assert_eq!(server.document_id(2), Ok(3));
    assert_eq!(server.document_ids().collect::<Vec<_>>(), vec![5, 1, 3]);
    for index in [-1, 3, i32::MAX, i32::MIN] {
        let err = server.document_id(index).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }
}

#[test]
fn it_matches_plus_words() {
    let server = pet_server();
    let (words, status) = server.match_document("пушистый кот ухоженный", 1).unwrap();
    assert_eq!(words, vec!["кот".to_string(), "пушистый".to_string()]);
    assert_eq!(status, DocumentStatus::Actual);

    let (words, _) = server.match_document("пушистый -хвост", 1).unwrap();
    assert!(words.is_empty());
}

#[test]
fn it_fails_to_match_unknown_documents() {
    let server = pet_server();
    let err = server.match_document("кот", 99).unwrap_err();
    assert_eq!(err, SearchError::DocumentNotFound { id: 99 });
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn it_keeps_instances_independent() {
    let mut first = SearchServer::new("cat").unwrap();
    let mut second = SearchServer::new("dog").unwrap();
    first.add_document(0, "cat dog", DocumentStatus::Actual, &[]).unwrap();
    second.add_document(0, "cat dog", DocumentStatus::Actual, &[]).unwrap();
    assert!(first.find_top_documents("cat").unwrap().is_empty());
    assert_eq!(second.find_top_documents("cat").unwrap().len(), 1);
}
