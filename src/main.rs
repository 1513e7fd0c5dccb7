use std::{
    error::Error,
    io::{stdout, Write},
    process::exit,
};

use tagtree::{
    attrs,
    html::{form, img, input, label, ContainerElement},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Two labelled image and input pairs, and a submit button
fn signup_form() -> Result<ContainerElement> {
    let mut label_a = label(vec![], Default::default());
    label_a.add_child(img(attrs!("src" => "img1.jpg", "alt" => "1 not found ")?));
    label_a.add_child(input(attrs!("type" => "text", "name" => "inputA")?));

    let mut label_b = label(vec![], Default::default());
    label_b.add_child(img(attrs!("src" => "img2.jpg", "alt" => "2 not found ")?));
    label_b.add_child(input(attrs!("type" => "password", "name" => "inputB")?));

    let submit = input(attrs!("type" => "submit", "value" => "Send")?);

    let mut form = form(vec![], Default::default());
    form.add_child(label_a);
    form.add_child(label_b);
    form.add_child(submit);

    Ok(form)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(&mut stdout().lock()) {
        eprintln!("{error}");
        exit(1)
    }
}

/// Writes the markup exactly, with no trailing newline
fn run(output: &mut impl Write) -> std::result::Result<(), Box<dyn Error>> {
    write!(output, "{}", signup_form()?)?;
    output.flush()?;

    Ok(())
}
