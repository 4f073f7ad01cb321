use parsego::{Error, Failure, Parser, Success, go, literal, pattern, run};
use pretty_assertions::assert_eq;

/// `<tag>content</tag>`, where the closing tag has to repeat the opening one
fn element<'code>() -> Result<impl Parser<'code, Output = String>, Error> {
    let name = pattern("[^>]*")?;
    let content = pattern("[^<]*")?;

    Ok(go(move |s| {
        s.bind(literal("<"))?;
        let tag = s.bind(&name)?;
        s.bind(literal(">"))?;
        let text = s.bind(&content)?;
        s.bind(literal(format!("</{}>", tag)))?;

        Ok(format!("{}: {}", tag, text))
    }))
}

#[test]
fn element_with_matching_tags() -> Result<(), Error> {
    let parser = element()?;
    assert_eq!(
        run(&parser, "<h1>title</h1>")?,
        Success::new("h1: title".to_string(), "")
    );
    Ok(())
}

#[test]
fn element_with_mismatched_closing_tag() -> Result<(), Error> {
    let parser = element()?;
    assert_eq!(
        parser.parse("<h1>title</h2>").unwrap_err(),
        Failure::new("</h1>", "</h2>")
    );
    Ok(())
}

#[test]
fn element_leaves_trailing_input() -> Result<(), Error> {
    let parser = element()?;
    assert_eq!(
        parser.parse("<p>a</p><p>b</p>").unwrap(),
        Success::new("p: a".to_string(), "<p>b</p>")
    );
    Ok(())
}

#[test]
fn element_empty_content() -> Result<(), Error> {
    let parser = element()?;
    assert_eq!(
        run(&parser, "<br></br>")?,
        Success::new("br: ".to_string(), "")
    );
    Ok(())
}

#[test]
fn element_error_message_for_caller() -> Result<(), Error> {
    let parser = element()?;
    let error = run(&parser, "h1>title</h1>").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parse error. expect '<'. Found 'h1>title</h1> instead.'"
    );
    Ok(())
}

#[test]
fn invalid_pattern_surfaces_as_error() {
    let error = pattern("[^>").unwrap_err();
    let error: Error = error.into();
    assert!(matches!(error, Error::Pattern(_)));
}
