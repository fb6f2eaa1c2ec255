// Pipelines — multi-step flows shared by the web handlers and the CLI.

pub mod ingest;
