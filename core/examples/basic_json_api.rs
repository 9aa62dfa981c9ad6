use apiwrap_core::{ApiBuilder, EndpointDescriptor, HttpVerb, ReturnShape};

fn main() {
    // A single GET endpoint proxying the JSONPlaceholder fake REST API.
    let mut builder = ApiBuilder::new(
        "jsonplaceholder",
        "https://jsonplaceholder.typicode.com/posts",
    );
    builder.add_endpoint(&EndpointDescriptor::new(
        "get_posts",
        HttpVerb::Get,
        ReturnShape::Structured,
    ));
    println!("{}", builder.code());
}
