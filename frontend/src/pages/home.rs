use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::card::InteractiveCard;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::effects::reveal::RevealObserver;
use crate::error;
use crate::slideshow::{announcements, Slideshow};

const ABOUT: &[(&str, &str)] = &[
    ("Our Mission", "Produce technologists who design, run and improve the industrial systems their communities depend on."),
    ("Hands-on Learning", "Every course pairs lectures with laboratory hours on the same machines used in local plants."),
    ("Industry Linkages", "On-the-job training with partner companies starts in the third year of every program."),
];

const PROGRAMS: &[(&str, &str, &str)] = &[
    ("Automotive Technology", "4 years", "Engine systems, diagnostics and fleet maintenance."),
    ("Electrical Technology", "4 years", "Power distribution, wiring design and motor controls."),
    ("Electronics Technology", "4 years", "Embedded devices, instrumentation and PLC automation."),
    ("Manufacturing Technology", "4 years", "Machining, CNC programming and production planning."),
];

const FACULTY: &[(&str, &str, &str)] = &[
    ("Engr. Maria Santos", "Department Chair", "Industrial automation"),
    ("Dr. Ramon Cruz", "Professor", "Power systems"),
    ("Prof. Liza Reyes", "Associate Professor", "Embedded electronics"),
    ("Engr. Paolo Mendoza", "Instructor", "CNC machining"),
];

const RESEARCH: &[(&str, &str)] = &[
    ("Smart Energy Monitoring", "Low-cost metering for small workshops and campus buildings."),
    ("Predictive Maintenance", "Vibration analysis for early detection of motor faults."),
    ("Sustainable Fabrication", "Recycled aluminum casting for teaching laboratories."),
];

/// Number of hover cards rendered on the page.
pub fn card_count() -> usize {
    ABOUT.len() + PROGRAMS.len() + FACULTY.len() + RESEARCH.len()
}

#[function_component(Home)]
pub fn home() -> Html {
    let announcements = use_memo(|_| announcements::load(), ());

    // Reveal runs once every section is in the DOM.
    use_effect_with_deps(
        move |_| {
            info!("Enhanced interactions added to {} cards", card_count());
            let reveal = error::init_feature("scroll animations", RevealObserver::observe_page);
            move || drop(reveal)
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <main>
            <Hero />

            <section id="about" class="section">
                <h2 class="section-title animate-text">{"About the Department"}</h2>
                <div class="card-grid">
                    { for ABOUT.iter().map(|(title, body)| html! {
                        <InteractiveCard class="about-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </InteractiveCard>
                    }) }
                </div>
            </section>

            <section id="programs" class="section alt">
                <h2 class="section-title animate-text">{"Degree Programs"}</h2>
                <div class="card-grid">
                    { for PROGRAMS.iter().map(|(name, length, focus)| html! {
                        <InteractiveCard class="program-card">
                            <h3>{*name}</h3>
                            <span class="program-length">{*length}</span>
                            <p>{*focus}</p>
                        </InteractiveCard>
                    }) }
                </div>
            </section>

            <section id="faculty" class="section">
                <h2 class="section-title animate-text">{"Faculty"}</h2>
                <div class="card-grid">
                    { for FACULTY.iter().map(|(name, role, field)| html! {
                        <InteractiveCard class="faculty-card">
                            <h3>{*name}</h3>
                            <span class="faculty-role">{*role}</span>
                            <p>{*field}</p>
                        </InteractiveCard>
                    }) }
                </div>
            </section>

            <section id="research" class="section alt">
                <h2 class="section-title animate-text">{"Research"}</h2>
                <div class="card-grid">
                    { for RESEARCH.iter().map(|(title, summary)| html! {
                        <InteractiveCard class="research-item">
                            <h3>{*title}</h3>
                            <p>{*summary}</p>
                        </InteractiveCard>
                    }) }
                </div>
            </section>

            <Slideshow announcements={(*announcements).clone()} />

            <section id="contact" class="section">
                <h2 class="section-title animate-text">{"Contact Us"}</h2>
                <div class="contact-layout">
                    <div class="contact-info animate-text">
                        <p>{"Industrial Technology Building, Room 101"}</p>
                        <p>{"Monday to Friday, 8:00 AM - 5:00 PM"}</p>
                        <p>{"indtech@college.edu"}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} Department of Industrial Technology", year)}</p>
            </footer>
        </main>
    }
}
