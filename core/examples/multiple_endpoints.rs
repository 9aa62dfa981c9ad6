use apiwrap_core::{ApiBuilder, EndpointDescriptor, HttpVerb, ReturnShape};

fn main() {
    let mut builder = ApiBuilder::new("blog_api", "https://jsonplaceholder.typicode.com");

    for name in ["get_posts", "get_comments", "get_users"] {
        builder.add_endpoint(&EndpointDescriptor::new(
            name,
            HttpVerb::Get,
            ReturnShape::Structured,
        ));
    }
    builder.add_endpoint(&EndpointDescriptor::new(
        "create_post",
        HttpVerb::Post,
        ReturnShape::Structured,
    ));

    println!("{}", builder.code());
}
