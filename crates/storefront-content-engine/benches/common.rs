// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use storefront_content_engine::LinkableItem;

#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let base = "<h2>Choosing a Gaming Mouse</h2>\n<p>The Gaming Mouse Pro X is light. Most Keyboards ship with a \
                <a href=\"/guide\">Wireless Mouse</a> guide.</p>\n[product:gaming-mouse-pro-x,featured]\n\
                <pre><code>Mechanical Keyboard</code></pre>\n<p>A Mechanical Keyboard pairs well with a \
                Wireless Mouse and a USB-C Hub.</p>\n[products:keyboards,4]\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_catalog(extra: usize) -> Vec<LinkableItem> {
    let mut items = vec![
        LinkableItem::product("gaming-mouse-pro-x", "Gaming Mouse Pro X"),
        LinkableItem::product("gaming-mouse", "Gaming Mouse"),
        LinkableItem::product("wireless-mouse", "Wireless Mouse"),
        LinkableItem::product("mechanical-keyboard", "Mechanical Keyboard"),
        LinkableItem::product("usb-c-hub", "USB-C Hub"),
        LinkableItem::category("keyboards", "Keyboards"),
    ];
    for i in 0..extra {
        items.push(LinkableItem::product(format!("filler-{i}"), format!("Filler Product {i}")));
    }
    items
}
