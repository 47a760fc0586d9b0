//! Pet catalog: browse with filters and a per-pet detail screen.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use leptos::prelude::*;

use crate::net::types::{Pet, PetFilter, PetStatus, PetType};

#[must_use]
pub fn type_label(kind: PetType) -> &'static str {
    match kind {
        PetType::Dog => "Dog",
        PetType::Cat => "Cat",
        PetType::Other => "Other",
    }
}

#[must_use]
pub fn status_label(status: PetStatus) -> &'static str {
    match status {
        PetStatus::Available => "Available",
        PetStatus::Fostered => "In foster care",
        PetStatus::Adopted => "Adopted",
    }
}

/// "Under a year", "1 year", "4 years".
#[must_use]
pub fn age_label(years: u32) -> String {
    match years {
        0 => "Under a year".to_owned(),
        1 => "1 year".to_owned(),
        n => format!("{n} years"),
    }
}

#[must_use]
pub fn pet_href(id: i64) -> String {
    format!("/pet/{id}")
}

/// Filterable grid of every pet in the catalog.
#[component]
pub fn BrowsePetsPage() -> impl IntoView {
    let kind = RwSignal::new(None::<PetType>);
    let status = RwSignal::new(None::<PetStatus>);
    let breed = RwSignal::new(String::new());
    let filter = Memo::new(move |_| PetFilter { kind: kind.get(), status: status.get(), breed: breed.get() });

    let pets = LocalResource::new(move || {
        let filter = filter.get();
        async move { crate::net::api::fetch_pets(&filter).await }
    });

    view! {
        <section class="browse-pets">
            <form class="browse-pets__filters" on:submit=|ev| ev.prevent_default()>
                <select on:change=move |ev| kind.set(PetType::parse(&event_target_value(&ev)))>
                    <option value="">"All types"</option>
                    {PetType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{type_label(t)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| status.set(PetStatus::parse(&event_target_value(&ev)))>
                    <option value="">"Any status"</option>
                    {PetStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{status_label(s)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    type="text"
                    placeholder="Breed"
                    prop:value=move || breed.get()
                    on:change=move |ev| breed.set(event_target_value(&ev))
                />
            </form>
            <Suspense fallback=|| view! { <p class="browse-pets__status">"Loading..."</p> }>
                {move || {
                    pets.get()
                        .map(|result| match result {
                            Some(list) if list.is_empty() => {
                                view! { <p class="browse-pets__status">"No pets match these filters."</p> }
                                    .into_any()
                            }
                            Some(list) => view! {
                                <div class="browse-pets__grid">
                                    {list.into_iter().map(|pet| view! { <PetCard pet=pet/> }).collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            None => {
                                view! { <p class="browse-pets__status">"Could not load pets."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn PetCard(pet: Pet) -> impl IntoView {
    let subtitle = format!("{} · {} · {}", type_label(pet.kind), pet.breed, age_label(pet.age));
    view! {
        <a class="pet-card" href=pet_href(pet.id)>
            <h3 class="pet-card__name">{pet.name}</h3>
            <p class="pet-card__meta">{subtitle}</p>
            <span class="pet-card__status">{status_label(pet.status)}</span>
        </a>
    }
}

/// Detail page for the pet captured by the `:id` segment.
#[component]
pub fn PetDetailPage(id: String) -> impl IntoView {
    let pet = LocalResource::new(move || {
        let id = id.clone();
        async move { crate::net::api::fetch_pet(&id).await }
    });

    view! {
        <section class="pet-detail">
            <Suspense fallback=|| view! { <p class="pet-detail__status">"Loading..."</p> }>
                {move || {
                    pet.get()
                        .map(|result| match result {
                            Some(pet) => view! { <PetProfile pet=pet/> }.into_any(),
                            None => view! { <p class="pet-detail__status">"Pet not found."</p> }.into_any(),
                        })
                }}
            </Suspense>
            <a class="btn" href="/browse-pets">"Back to all pets"</a>
        </section>
    }
}

#[component]
fn PetProfile(pet: Pet) -> impl IntoView {
    let facts = format!("{} · {} · {} · {}", type_label(pet.kind), pet.breed, age_label(pet.age), pet.gender);
    let alt = pet.name.clone();
    view! {
        <article class="pet-profile">
            {pet.image_url.map(|src| view! { <img class="pet-profile__photo" src=src alt=alt/> })}
            <h2>{pet.name}</h2>
            <p class="pet-profile__facts">{facts}</p>
            <p class="pet-profile__status">{status_label(pet.status)}</p>
            <p class="pet-profile__description">{pet.description}</p>
            <ul class="pet-profile__traits">
                {pet.traits.into_iter().map(|t| view! { <li>{t}</li> }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
