use html::{html, raw, text};

#[test]
fn test_element() {
	let node = html!(<div class="greeting">"Hello World"</div>);
	assert_eq!(node.render_to_string(), r#"<div class="greeting">Hello World</div>"#);
}

#[test]
fn test_blocks_and_lists() {
	let columns = vec!["age".to_owned(), "city".to_owned()];
	let node = html! {
		<tr>
			{columns.iter().map(|column| html! { <th>{column.clone()}</th> }).collect::<Vec<_>>()}
			<th>"Count"</th>
		</tr>
	};
	assert_eq!(
		node.render_to_string(),
		"<tr><th>age</th><th>city</th><th>Count</th></tr>"
	);
}

#[test]
fn test_fragment() {
	let node = html! {
		<>
			<h2>"Occurrences"</h2>
			<p>"none"</p>
		</>
	};
	assert_eq!(node.render_to_string(), "<h2>Occurrences</h2><p>none</p>");
}

#[test]
fn test_text_is_escaped() {
	let value = "<script>alert('x')</script>".to_owned();
	let node = html!(<td data-column={value.clone()}>{value}</td>);
	assert_eq!(
		node.render_to_string(),
		"<td data-column=\"&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</td>"
	);
}

#[test]
fn test_raw_and_optional() {
	let missing: Option<String> = None;
	let name: Option<String> = None;
	let node = html! {
		<div>
			{raw!("<b>bold</b>")}
			{text!("a & b")}
			{missing}
			<input disabled={true} name={name} />
		</div>
	};
	assert_eq!(
		node.render_to_string(),
		"<div><b>bold</b>a &amp; b<input disabled /></div>"
	);
}
