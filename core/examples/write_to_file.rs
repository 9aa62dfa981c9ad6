use std::fs;

use apiwrap_core::{ApiBuilder, EndpointDescriptor, HttpVerb, ReturnShape};

fn main() {
    let mut builder = ApiBuilder::new("my_api", "https://api.example.com/v1/data");
    builder.add_endpoint(&EndpointDescriptor::new(
        "list_items",
        HttpVerb::Get,
        ReturnShape::Structured,
    ));
    builder.add_endpoint(&EndpointDescriptor::new(
        "get_item",
        HttpVerb::Get,
        ReturnShape::scalar("str"),
    ));
    builder.add_endpoint(&EndpointDescriptor::new(
        "create_item",
        HttpVerb::Post,
        ReturnShape::Structured,
    ));

    fs::write("my_api.py", builder.code()).expect("Could not write my_api.py");
    println!("Generated Flask app '{}' written to my_api.py", builder.name());
    println!("Run it with: pip install flask requests && python my_api.py");
}
