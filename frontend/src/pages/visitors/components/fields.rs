use crate::{
    components::{common::TextField, webcam::WebcamCapture},
    pages::visitors::utils::VisitorFormState,
    utils::photo::photo_src,
};
use leptos::*;

/// Inputs shared by the register and edit forms, including the camera.
#[component]
pub fn VisitorFields(form: RwSignal<VisitorFormState>) -> impl IntoView {
    let preview = move || form.with(|s| s.photo.as_deref().and_then(photo_src));

    view! {
        <div class="grid gap-4 md:grid-cols-2">
            <TextField
                label="Nome"
                name="name"
                placeholder="Nome"
                value=Signal::derive(move || form.with(|s| s.name.clone()))
                on_input=Callback::new(move |value: String| form.update(|s| s.name = value))
                required=true
            />
            <TextField
                label="Sobrenome"
                name="surName"
                placeholder="Sobrenome"
                value=Signal::derive(move || form.with(|s| s.sur_name.clone()))
                on_input=Callback::new(move |value: String| form.update(|s| s.sur_name = value))
                required=true
            />
            <TextField
                label="RG"
                name="rg"
                placeholder="RG"
                value=Signal::derive(move || form.with(|s| s.rg.clone()))
                on_input=Callback::new(move |value: String| form.update(|s| s.rg = value))
            />
            <TextField
                label="Telefone"
                name="phone"
                input_type="tel"
                placeholder="Telefone"
                value=Signal::derive(move || form.with(|s| s.phone.clone()))
                on_input=Callback::new(move |value: String| form.update(|s| s.phone = value))
            />
        </div>
        <div class="space-y-2">
            {move || {
                preview()
                    .map(|src| {
                        view! {
                            <img src=src alt="Foto do visitante" class="h-32 w-32 rounded-md object-cover border border-border" />
                        }
                    })
            }}
            <WebcamCapture on_capture=Callback::new(move |data_url: String| {
                form.update(|s| s.photo = Some(data_url))
            }) />
        </div>
    }
}
