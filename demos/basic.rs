use urlcarve::{QueryParam, parse, parse_query, split_path, url_decode};

const MAX_PART_COUNT: usize = 3;
const MAX_PARAM_COUNT: usize = 6;

fn show(view: Option<&[u8]>) -> String {
    view.map_or_else(|| "(none)".into(), |v| String::from_utf8_lossy(v).into_owned())
}

fn main() -> Result<(), urlcarve::ParseError> {
    let mut buf = *b"http://localhost:8989/path/to/test?flag1&query=yes&flag2&param1=no&flag3&greet=hello%20world#frag=1";

    // Parse a URL in place
    let url = parse(&mut buf)?;

    println!("Struct values:");
    println!("\tscheme:\t\t{}", show(url.scheme.as_deref()));
    println!("\thost:\t\t{}", show(url.host.as_deref()));
    println!("\tport:\t\t{}", url.port);
    println!("\tpath:\t\t{}", show(url.path.as_deref()));
    println!("\tquery:\t\t{}", show(url.query.as_deref()));
    println!("\tfragment:\t{}", show(url.fragment.as_deref()));

    let mut parts: [&mut [u8]; MAX_PART_COUNT] = Default::default();
    let count = url.path.map_or(0, |path| split_path(path, &mut parts));
    let parts: Vec<String> = parts[..count]
        .iter()
        .map(|p| String::from_utf8_lossy(p).into_owned())
        .collect();
    println!("\nPath parts: {parts:?}\n");

    println!("Query string parameters:");
    let mut params: [QueryParam<'_>; MAX_PARAM_COUNT] = Default::default();
    let query = url.query.ok_or(urlcarve::ParseError::EmptyInput)?;
    let count = parse_query(query, b'&', &mut params)?;

    for param in params.iter_mut().take(count) {
        let key = url_decode(&mut *param.key);
        let val = param.val.as_deref_mut().map(url_decode);
        println!("\t{}: {}", show(Some(&*key)), show(val.as_deref()));
    }

    Ok(())
}
