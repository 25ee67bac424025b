use std::error::Error;

use actix_web::HttpResponseBuilder;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

pub fn insert_headers(
    builder: &mut HttpResponseBuilder,
    headers: impl IntoIterator<Item = (String, String)>,
) -> &mut HttpResponseBuilder {
    for header in headers {
        builder.insert_header(header);
    }
    builder
}
