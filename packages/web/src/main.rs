fn main() {
    dioxus::launch(ui::MindCheck);
}
