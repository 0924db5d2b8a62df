#![allow(clippy::print_stdout)]

use resolve_uri::{UriRef, resolve};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        // Source map style resolution: sourceRoot + sources entry
        let source_root = "https://cdn.example.com/assets/js/";
        for source in ["../src/index.ts", "./util.ts", "/abs/lib.ts", "#L10"] {
            println!("{source} -> {}", resolve(source, Some(source_root)));
        }
        // https://cdn.example.com/assets/src/index.ts
        // https://cdn.example.com/assets/js/util.ts
        // https://cdn.example.com/abs/lib.ts
        // https://cdn.example.com/assets/js/#L10

        println!("{}", resolve("foo/../../../bar/main.js.map", Some("dir/"))); // ../bar/main.js.map
        return;
    };
    let base = args.next();

    let uri = UriRef::parse(&input);
    println!("Kind: {:?}", uri.kind());
    println!("Scheme: {:?}", uri.scheme());
    println!("User: {:?}", uri.user());
    println!("Host: {:?}", uri.host());
    println!("Path: {}", uri.path());
    println!("Query: {:?}", uri.query());
    println!("Hash: {:?}", uri.hash());
    println!("Resolved: {}", resolve(&input, base.as_deref()));
}
