use apiwrap_core::{ApiBuilder, EndpointDescriptor, HttpVerb, ReturnShape};

fn main() {
    // httpbin.org/html serves plain HTML, so the body is returned as a
    // Python str instead of being parsed as JSON.
    let mut builder = ApiBuilder::new("html_fetcher", "https://httpbin.org/html");
    builder.add_endpoint(&EndpointDescriptor::new(
        "fetch_html",
        HttpVerb::Get,
        ReturnShape::scalar("str"),
    ));
    println!("{}", builder.code());
}
