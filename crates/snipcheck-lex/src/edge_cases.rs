//! Edge case tests for snipcheck-lex
