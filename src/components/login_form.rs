//! Login Form Component
//!
//! Login and Sign Up tabs sharing one loading flag, each with a simulated
//! face scan. Nothing is authenticated.

use campus_core::{LoginDraft, SignupDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TabBar;
use crate::commands::{self, FaceScan};
use crate::context::use_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Signup,
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app();
    let (tab, set_tab) = signal(AuthTab::Login);
    let (loading, set_loading) = signal(false);
    let (scanning, set_scanning) = signal(false);

    let on_scan = move |mode: FaceScan| {
        if scanning.get_untracked() {
            return;
        }
        set_scanning.set(true);
        spawn_local(async move {
            match commands::scan_face(mode).await {
                Ok(()) => match mode {
                    FaceScan::Verify => ctx.toast("Face Verified", "Identity confirmed by face recognition."),
                    FaceScan::Register => ctx.toast("Face Captured", "Your face has been registered."),
                },
                Err(e) => ctx.toast_error("Face Scan Failed", e),
            }
            set_scanning.set(false);
        });
    };

    let tabs = vec![(AuthTab::Login, "Login"), (AuthTab::Signup, "Sign Up")];

    view! {
        <div class="card auth-card">
            <div class="card-header centered">
                <h3 class="card-title">"Welcome to CampusConnect"</h3>
                <p class="card-description">"Manage your campus resources efficiently"</p>
                <TabBar tabs=tabs current=tab set_current=set_tab />
            </div>
            <div class="card-content stack">
                {move || match tab.get() {
                    AuthTab::Login => view! {
                        <LoginPane loading=loading set_loading=set_loading />
                        <Divider label="Or continue with" />
                        <FaceButton
                            idle="Face Recognition"
                            busy="Processing..."
                            scanning=scanning
                            on_click=move |_| on_scan(FaceScan::Verify)
                        />
                    }.into_any(),
                    AuthTab::Signup => view! {
                        <SignupPane loading=loading set_loading=set_loading />
                        <Divider label="Register Face" />
                        <FaceButton
                            idle="Scan Face"
                            busy="Capturing..."
                            scanning=scanning
                            on_click=move |_| on_scan(FaceScan::Register)
                        />
                    }.into_any(),
                }}
            </div>
            <div class="card-footer centered">
                <p class="small muted">"Protected by campus security protocols."</p>
            </div>
        </div>
    }
}

#[component]
fn LoginPane(loading: ReadSignal<bool>, set_loading: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let draft = LoginDraft { email: email.get_untracked(), password: password.get_untracked() };
        set_loading.set(true);
        spawn_local(async move {
            match commands::sign_in(draft).await {
                Ok(()) => ctx.toast("Signed In", "Welcome back to CampusConnect."),
                Err(e) => ctx.toast_error("Login Failed", e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="stack" on:submit=on_submit>
            <div class="field">
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="student@ccet.edu"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[component]
fn SignupPane(loading: ReadSignal<bool>, set_loading: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (student_id, set_student_id) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let draft = SignupDraft {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            student_id: student_id.get_untracked(),
            password: password.get_untracked(),
        };
        set_loading.set(true);
        spawn_local(async move {
            match commands::sign_up(draft).await {
                Ok(()) => ctx.toast("Account Created", "Your CampusConnect account is ready. You can now log in."),
                Err(e) => ctx.toast_error("Sign Up Failed", e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="stack" on:submit=on_submit>
            <div class="field">
                <label for="signup-name">"Full Name"</label>
                <input
                    id="signup-name"
                    placeholder="John Doe"
                    required
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    placeholder="student@ccet.edu"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="signup-student-id">"Student ID"</label>
                <input
                    id="signup-student-id"
                    placeholder="CS12345"
                    required
                    prop:value=move || student_id.get()
                    on:input=move |ev| set_student_id.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}

#[component]
fn Divider(label: &'static str) -> impl IntoView {
    view! {
        <div class="divider">
            <span>{label}</span>
        </div>
    }
}

#[component]
fn FaceButton(
    idle: &'static str,
    busy: &'static str,
    scanning: ReadSignal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-outline btn-block"
            disabled=move || scanning.get()
            on:click=move |_| on_click.run(())
        >
            {move || if scanning.get() {
                view! { <span class="pulse">{busy} " 📷"</span> }.into_any()
            } else {
                view! { <span>{idle} " 📷"</span> }.into_any()
            }}
        </button>
    }
}
