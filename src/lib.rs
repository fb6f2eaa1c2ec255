// tfidf-upload: score the words of an uploaded text file.
//
// This is the library root. Each module corresponds to one part of the
// upload → score → store → display flow.

pub mod config;
pub mod db;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;
pub mod uploads;
pub mod web;
