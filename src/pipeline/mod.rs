// Pipelines that stitch the remote sources and the cache together.

pub mod timeline;
