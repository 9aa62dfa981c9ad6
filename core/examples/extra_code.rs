use apiwrap_core::{ApiBuilder, EndpointDescriptor, HttpVerb, ReturnShape};

fn main() {
    let mut builder = ApiBuilder::new("debug_api", "https://jsonplaceholder.typicode.com/posts");

    // Statements injected into the view body before the upstream call.
    builder.add_endpoint(
        &EndpointDescriptor::new("get_posts_debug", HttpVerb::Get, ReturnShape::Structured)
            .with_extra_source(r#"print("Fetching posts...")"#),
    );
    builder.add_endpoint(
        &EndpointDescriptor::new("get_posts_logged", HttpVerb::Get, ReturnShape::Structured)
            .with_extra_source(r#"import logging; logging.info("GET /posts called")"#),
    );

    println!("{}", builder.code());
}
