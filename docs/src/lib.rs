doc_comment::doctest!("readme.md");

doc_comment::doctest!("guide/resolvers.md");
doc_comment::doctest!("guide/flags.md");
doc_comment::doctest!("guide/configuration.md");
doc_comment::doctest!("guide/failures.md");
