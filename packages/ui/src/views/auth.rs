//! Login and signup form.

use api::{Credentials, SignupForm};
use dioxus::prelude::*;

use crate::context::use_dispatch;
use crate::controller::Command;

/// Auth screen. Toggles between login and signup; signup also collects the
/// demographic fields.
#[component]
pub fn AuthView() -> Element {
    let dispatch = use_dispatch();
    let mut is_login = use_signal(|| true);
    let mut submitting = use_signal(|| false);

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    // Sign up fields
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut region = use_signal(String::new);
    let mut local_language = use_signal(String::new);
    let mut education_level = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let command = if is_login() {
            Command::SignIn(Credentials::new(email(), password()))
        } else {
            Command::SignUp(SignupForm {
                email: email(),
                password: password(),
                name: name(),
                age: age(),
                gender: gender(),
                region: region(),
                local_language: local_language(),
                education_level: education_level(),
            })
        };

        spawn(async move {
            submitting.set(true);
            // On success this view is replaced, so only reset on failure
            if !dispatch.send(command).await.is_applied() {
                submitting.set(false);
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 {
                class: "title",
                if is_login() { "Welcome Back!" } else { "Create Account" }
            }

            form {
                onsubmit: handle_submit,
                style: "width: 100%;",

                if !is_login() {
                    input {
                        class: "input",
                        placeholder: "Name",
                        value: name(),
                        required: true,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        placeholder: "Age",
                        value: age(),
                        required: true,
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                    input {
                        class: "input",
                        placeholder: "Gender",
                        value: gender(),
                        oninput: move |evt: FormEvent| gender.set(evt.value()),
                    }
                    input {
                        class: "input",
                        placeholder: "Region (e.g., Country, State)",
                        value: region(),
                        oninput: move |evt: FormEvent| region.set(evt.value()),
                    }
                    input {
                        class: "input",
                        placeholder: "Primary Language",
                        value: local_language(),
                        oninput: move |evt: FormEvent| local_language.set(evt.value()),
                    }
                    input {
                        class: "input",
                        placeholder: "Education Level",
                        value: education_level(),
                        oninput: move |evt: FormEvent| education_level.set(evt.value()),
                    }
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    required: true,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    required: true,
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        "Please wait..."
                    } else if is_login() {
                        "Login"
                    } else {
                        "Sign Up"
                    }
                }
            }

            button {
                class: "switch-button",
                onclick: move |_| {
                    let login = is_login();
                    is_login.set(!login);
                },
                if is_login() {
                    "Don't have an account? Sign Up"
                } else {
                    "Already have an account? Login"
                }
            }
        }
    }
}
