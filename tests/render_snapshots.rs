//! Snapshot tests for rendered markup.

use std::time::Instant;
use x0_site::components::{CodeBlock, Disclosure, FaqItem, NavLink, Navbar};
use x0_site::formats::html::{render_line, HtmlTheme};
use x0_site::formats::FormatRegistry;
use x0_site::{tokenize_block, tokenize_line};

#[test]
fn test_statement_markup() {
    let html = render_line(
        &tokenize_line("const agent = await client.createAgent(policy);"),
        &HtmlTheme::default(),
    );
    insta::assert_snapshot!(html, @r###"<span class="text-purple-400">const</span> agent = <span class="text-purple-400">await</span> client.<span class="text-blue-400">createAgent</span>(policy);"###);
}

#[test]
fn test_import_markup() {
    let html = render_line(
        &tokenize_line("import { X0Client } from \"@x0/sdk\";"),
        &HtmlTheme::default(),
    );
    insta::assert_snapshot!(html, @r###"<span class="text-purple-400">import</span> { <span class="text-yellow-400">X0Client</span> } <span class="text-purple-400">from</span> <span class="text-green-400">&quot;@x0/sdk&quot;</span>;"###);
}

#[test]
fn test_code_block_markup() {
    let block = CodeBlock::new("// limit\nconst max = 100_000;")
        .with_title("Policy")
        .with_language("ts");
    insta::assert_snapshot!(block.render(&HtmlTheme::default(), Instant::now()), @r###"
    <div class="code-block">
    <div class="code-title"><span>Policy</span><span class="code-language">ts</span></div>
    <button class="copy-button" aria-label="Copy code" data-copied="false">Copy</button>
    <pre><code>
    <div class="table-row"><span class="line-number">1</span><span class="table-cell"><span class="text-gray-500">// limit</span></span></div>
    <div class="table-row"><span class="line-number">2</span><span class="table-cell"><span class="text-purple-400">const</span> max = <span class="text-orange-400">100_000</span>;</span></div>
    </code></pre>
    </div>
    "###);
}

#[test]
fn test_faq_markup() {
    let mut faq = Disclosure::new(vec![
        FaqItem::new("What is x0?", "A payments protocol."),
        FaqItem::new("Is it fast?", "Yes."),
    ]);
    faq.toggle(1);
    insta::assert_snapshot!(faq.render(), @r###"
    <div class="faq">
    <div class="faq-item"><button aria-expanded="false">What is x0?</button><p>A payments protocol.</p></div>
    <div class="faq-item is-open"><button aria-expanded="true">Is it fast?</button><p>Yes.</p></div>
    </div>
    "###);
}

#[test]
fn test_navbar_markup() {
    let mut nav = Navbar::new(
        "x0",
        vec![NavLink::new("Ecosystem", "#features")],
        vec![NavLink::new("Docs", "/docs"), NavLink::new("GitHub", "/gh")],
    );
    nav.toggle_mobile_menu();
    insta::assert_snapshot!(nav.render(), @r###"
    <nav class="navbar">
    <div class="nav-links"><a href="#features">Ecosystem</a></div>
    <div class="nav-brand"><a href="/">x0</a></div>
    <div class="nav-actions"><a href="/docs">Docs</a><a href="/gh">GitHub</a><button class="menu-toggle" aria-expanded="true">Menu</button></div>
    <div class="mobile-menu"><a href="#features">Ecosystem</a><a href="/docs">Docs</a></div>
    </nav>
    "###);
}

#[test]
fn test_tag_format() {
    let registry = FormatRegistry::with_defaults();
    let out = registry
        .serialize(&tokenize_block("throw new Error(\"x\")"), "tag")
        .unwrap();
    insta::assert_snapshot!(out, @r###"
    <line 1>
      <keyword>throw</keyword>
      <plain> </plain>
      <keyword>new</keyword>
      <plain> </plain>
      <function>Error</function>
      <plain>(</plain>
      <string>"x"</string>
      <plain>)</plain>
    "###);
}
