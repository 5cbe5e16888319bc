use chrono::{Datelike, Local};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Window};
use yew::prelude::*;

use crate::components::common::{scroll_to_pricing, CtaButton, SectionTitle, PRICING_ANCHOR};
use crate::components::faq_item::FaqItem;
use crate::config;
use crate::content;

const REVEAL_OFFSET_PX: f64 = 60.0;

// Promotes entered `reveal` elements to `reveal visible`. Promotion is
// one-way so entrance transitions play once.
fn reveal_entered_sections(window: &Window) {
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };
    let viewport_bottom = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    if let Ok(nodes) = document.query_selector_all(".reveal") {
        for index in 0..nodes.length() {
            let element = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok());
            if let Some(element) = element {
                let classes = element.class_name();
                if classes.contains("visible") {
                    continue;
                }
                let rect = element.get_bounding_client_rect();
                if rect.top() < viewport_bottom - REVEAL_OFFSET_PX {
                    element.set_class_name(&format!("{} visible", classes));
                }
            }
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal-on-scroll listener, removed again on unmount. The immediate
    // call settles everything already above the fold.
    {
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        reveal_entered_sections(&window_clone);
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    reveal_entered_sections(&window);
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to_pricing = Callback::from(move |_: MouseEvent| scroll_to_pricing());

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>
                        {"¿Cansado de vivir en modo supervivencia? Descubre cómo recuperar tu \
                          calma interior y despertar cada mañana con energía renovada, sin \
                          depender de soluciones complicadas ni pastillas"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Un sistema completo y práctico de estrategias basadas en ciencia que te \
                          guiará paso a paso para regular tu sistema nervioso, eliminar el \
                          agotamiento mental y construir una vida equilibrada que realmente \
                          puedas sostener... aunque ahora sientas que no tienes tiempo para ti \
                          mismo."}
                    </p>
                    <CtaButton onclick={go_to_pricing.clone()}>
                        {"Sí, quiero recuperar mi equilibrio ahora"}
                    </CtaButton>
                </div>
                <div class="hero-disc hero-disc-top"></div>
                <div class="hero-disc hero-disc-bottom"></div>
            </header>

            <section class="problem">
                <div class="problem-inner">
                    <SectionTitle>{"Si estás leyendo esto, probablemente..."}</SectionTitle>
                    <div class="problem-scenes">
                        { content::PROBLEM_SCENES.iter().enumerate().map(|(i, scene)| {
                            html! {
                                <div
                                    class="problem-card reveal from-left"
                                    style={format!("transition-delay: {}ms", i * 100)}
                                >
                                    <i class="fa-solid fa-circle-xmark"></i>
                                    <p>{*scene}</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>

                    <div class="uncomfortable-truth">
                        <p class="truth-lead">{"La verdad incómoda es que..."}</p>
                        <p class="truth-quote">
                            {"\"Estás viviendo en piloto automático, reaccionando constantemente, \
                              nunca realmente presente. Y lo peor es que empiezas a creer que 'así \
                              es la vida' y que no hay escapatoria.\""}
                        </p>
                    </div>

                    <div class="symptom-grid">
                        { content::SYMPTOMS.iter().map(|symptom| {
                            html! {
                                <div class="symptom-chip">
                                    <span class="symptom-dot"></span>
                                    <span class="symptom-text">{*symptom}</span>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="emotional">
                <div class="emotional-inner">
                    <h3 class="emotional-question">
                        {"¿Cuándo fue la última vez que te sentiste verdaderamente tranquilo?"}
                    </h3>
                    <p class="emotional-copy">
                        {"No hablo de estar viendo una serie mientras tu mente repasa la lista de \
                          pendientes. Hablo de esa sensación profunda de calma, donde tu cuerpo \
                          está relajado, tu mente está clara y sientes que realmente estás \
                          viviendo, no solo sobreviviendo."}
                    </p>
                    <div class="truth-panel">
                        <p class="truth-panel-lead">{"La verdad que nadie te dice:"}</p>
                        <p class="truth-panel-body">
                            {"Tu cuerpo no fue diseñado para vivir en estado de alerta constante. \
                              Cuando el estrés se vuelve crónico, tu sistema nervioso pierde la \
                              capacidad de regularse. Es como si el interruptor de \"calma\" se \
                              hubiera roto."}
                        </p>
                        <p class="truth-panel-hope">
                            {"Y aquí viene lo esperanzador: ese interruptor se puede reparar."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="solution">
                <div class="solution-inner">
                    <div class="solution-header">
                        <span class="solution-badge">{"Presentación de la solución"}</span>
                        <h2 class="solution-title">
                            {format!("{}: {}", config::PRODUCT_NAME, config::PRODUCT_TAGLINE)}
                        </h2>
                        <p class="solution-subtitle">
                            {"La caja de herramientas completa y práctica que te guiará paso a \
                              paso desde el caos mental hasta la calma sostenible."}
                        </p>
                    </div>

                    <div class="pillar-grid">
                        { content::PILLARS.iter().map(|pillar| {
                            html! {
                                <div class="pillar-card">
                                    <i class={pillar.icon}></i>
                                    <h4>{pillar.title}</h4>
                                    <p>{pillar.desc}</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>

                    <div class="expert-quote">
                        <img
                            src={config::author_avatar_url()}
                            alt={config::AUTHOR_NAME}
                            referrerpolicy="no-referrer"
                        />
                        <div class="expert-quote-text">
                            <p class="expert-line">
                                {"\"Este libro traduce conceptos científicos complejos en acciones \
                                  simples que puedes implementar HOY MISMO.\""}
                            </p>
                            <p class="expert-byline">
                                {format!("— {}, {}", config::AUTHOR_NAME, config::AUTHOR_ROLE)}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="benefits">
                <div class="benefits-inner">
                    <SectionTitle>
                        {"Al implementar las estrategias de este libro, experimentarás:"}
                    </SectionTitle>
                    <div class="benefit-grid">
                        { content::BENEFITS.iter().enumerate().map(|(i, benefit)| {
                            html! {
                                <div
                                    class="benefit-card reveal"
                                    style={format!("transition-delay: {}ms", i * 50)}
                                >
                                    <i class={benefit.icon}></i>
                                    <h4>{benefit.title}</h4>
                                    <p>{benefit.desc}</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="book-contents">
                <div class="contents-inner">
                    <SectionTitle light={true}>
                        {format!("Dentro de \"{}\" encontrarás:", config::PRODUCT_NAME)}
                    </SectionTitle>
                    <div class="contents-list">
                        { content::BOOK_CONTENTS.iter().map(|item| {
                            html! {
                                <div class="contents-row">
                                    <i class={item.icon}></i>
                                    <p>{item.text}</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="phases">
                <div class="phases-inner">
                    <SectionTitle>
                        {"El sistema de 3 fases que transforma tu relación con el estrés:"}
                    </SectionTitle>
                    <div class="phase-track">
                        <div class="phase-line"></div>
                        <div class="phase-grid">
                            { content::PHASES.iter().enumerate().map(|(i, step)| {
                                html! {
                                    <div class="phase-step">
                                        <div class="phase-circle">{i + 1}</div>
                                        <h4 class="phase-label">{step.label}</h4>
                                        <h5 class="phase-title">{step.title}</h5>
                                        <p class="phase-desc">{step.desc}</p>
                                        <div class="phase-result">
                                            <p class="phase-result-label">{"Resultado:"}</p>
                                            <p class="phase-result-text">{step.result}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </section>

            <section class="transformation">
                <div class="transformation-inner">
                    <SectionTitle>{"La Transformación Real"}</SectionTitle>
                    <div class="compare-grid">
                        <div class="before-card">
                            <h4>
                                <i class="fa-solid fa-circle-xmark"></i>
                                {"ANTES DE IMPLEMENTAR"}
                            </h4>
                            <ul>
                                { content::BEFORE_ITEMS.iter().map(|item| {
                                    html! {
                                        <li>
                                            <span class="bullet-dot">{"•"}</span>
                                            {*item}
                                        </li>
                                    }
                                }).collect::<Html>() }
                            </ul>
                        </div>
                        <div class="after-card">
                            <h4>
                                <i class="fa-solid fa-circle-check"></i>
                                {"DESPUÉS DE IMPLEMENTAR"}
                            </h4>
                            <ul>
                                { content::AFTER_ITEMS.iter().map(|item| {
                                    html! {
                                        <li>
                                            <i class="fa-solid fa-circle-check"></i>
                                            {*item}
                                        </li>
                                    }
                                }).collect::<Html>() }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="testimonials-inner">
                    <SectionTitle>{"Lo que dicen quienes ya lo probaron"}</SectionTitle>
                    <div class="testimonial-grid">
                        { content::TESTIMONIALS.iter().map(|testimonial| {
                            html! {
                                <div class="testimonial-card">
                                    <i class="fa-solid fa-star testimonial-star"></i>
                                    <p class="testimonial-quote">
                                        {format!("\"{}\"", testimonial.quote)}
                                    </p>
                                    <div>
                                        <p class="testimonial-name">{testimonial.name}</p>
                                        <p class="testimonial-meta">
                                            {format!("{}, {}", testimonial.age, testimonial.role)}
                                        </p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section id={PRICING_ANCHOR} class="pricing">
                <div class="pricing-inner">
                    <SectionTitle light={true}>{"Tu inversión hoy"}</SectionTitle>
                    <div class="pricing-card">
                        <div class="pricing-ribbon">{"Oferta de Lanzamiento"}</div>
                        <p class="pricing-eyebrow">{"Inversión Única"}</p>
                        <div class="price-row">
                            <span class="price-old">{config::LIST_PRICE}</span>
                            <span class="price-now">{config::LAUNCH_PRICE}</span>
                            <span class="price-currency">{config::PRICE_CURRENCY}</span>
                        </div>
                        <div class="includes-list">
                            { content::PRICE_INCLUDES.iter().map(|item| {
                                html! {
                                    <div class="includes-row">
                                        <i class="fa-solid fa-circle-check"></i>
                                        <span>{*item}</span>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                        <CtaButton class="pricing-cta">{"¡Quiero mi copia ahora!"}</CtaButton>
                        <div class="secure-row">
                            <i class="fa-solid fa-shield-halved"></i>
                            <span>{"Pago 100% Seguro y Encriptado"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="guarantee">
                <div class="guarantee-panel">
                    <div class="guarantee-badge">
                        <i class="fa-solid fa-shield-halved"></i>
                    </div>
                    <div class="guarantee-text">
                        <h3>{"Garantía de Satisfacción Total - 7 Días"}</h3>
                        <p>
                            {"Lee el libro. Implementa al menos 3 estrategias durante 7 días. Si \
                              no sientes una diferencia notable en tu nivel de estrés, calidad de \
                              sueño o claridad mental... simplemente envíame un correo y te \
                              devuelvo el 100% de tu dinero. Sin preguntas."}
                        </p>
                        <p class="guarantee-closing">
                            {"El riesgo es cero. El potencial de transformación es enorme."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="faq-block">
                <div class="faq-inner">
                    <SectionTitle>{"Preguntas Frecuentes"}</SectionTitle>
                    <div class="faq-list">
                        { content::FAQ_ENTRIES.iter().map(|entry| {
                            html! {
                                <FaqItem question={entry.question}>
                                    <p>{entry.answer}</p>
                                </FaqItem>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="author">
                <div class="author-inner">
                    <div class="author-portrait">
                        <img
                            src={config::author_portrait_url()}
                            alt={config::AUTHOR_NAME}
                            referrerpolicy="no-referrer"
                        />
                    </div>
                    <div class="author-bio">
                        <span class="author-eyebrow">{"Sobre la creadora"}</span>
                        <h3>{config::AUTHOR_NAME}</h3>
                        <p class="author-role">{config::AUTHOR_ROLE}</p>
                        <p class="author-copy">
                            {"Especializada en acompañar a personas que enfrentan estrés crónico y \
                              agotamiento mental. Su enfoque integra rigurosidad científica con \
                              aplicabilidad práctica, traduciendo conceptos complejos en \
                              estrategias claras y accesibles."}
                        </p>
                        <div class="author-tags">
                            { content::AUTHOR_TAGS.iter().map(|tag| {
                                html! { <span class="author-tag">{*tag}</span> }
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </section>

            <section class="final-cta">
                <div class="final-cta-inner">
                    <h2>{"¿Estás listo para liberarte del estrés?"}</h2>
                    <p class="final-copy">
                        {"La vida que quieres vivir - tranquila, equilibrada, con energía y \
                          claridad - está a un clic de distancia. Tú decides si hoy es el día en \
                          que todo cambia."}
                    </p>
                    <CtaButton class="final-button" onclick={go_to_pricing}>
                        {"Sí, quiero mi copia ahora"}
                    </CtaButton>
                    <p class="final-aphorism">
                        {"\"El mejor momento para plantar un árbol fue hace 20 años. El segundo \
                          mejor momento es ahora.\""}
                    </p>
                </div>
                <div class="cta-rings">
                    <div class="ring-small"></div>
                    <div class="ring-medium"></div>
                    <div class="ring-large"></div>
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-inner">
                    <p class="footer-copyright">
                        {format!(
                            "© {} {}. Todos los derechos reservados.",
                            Local::now().year(),
                            config::PRODUCT_NAME
                        )}
                    </p>
                    <p class="footer-disclaimer">
                        {"Este producto no garantiza resultados específicos. Los testimonios \
                          representan experiencias individuales y pueden variar. Este material no \
                          sustituye el consejo médico o psicológico profesional."}
                    </p>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    overflow-x: hidden;
                }

                .landing-page section,
                .landing-page header,
                .landing-page footer {
                    padding: 6rem 1.5rem;
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 800;
                    margin: 0 0 1.5rem;
                    text-align: center;
                    line-height: 1.25;
                    color: #0f172a;
                }

                .section-title.light {
                    color: #ffffff;
                }

                .cta-button {
                    background: #10b981;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.2);
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .cta-button:hover {
                    background: #059669;
                    transform: scale(1.05);
                }

                .cta-button:active {
                    transform: scale(0.95);
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal.from-left {
                    transform: translateX(-20px);
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                /* Hero */

                .hero {
                    position: relative;
                    background: #1a3a4a;
                    color: #ffffff;
                    text-align: center;
                    padding-top: 7rem;
                    padding-bottom: 8rem;
                    overflow: hidden;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    margin: 0 auto;
                    animation: hero-enter 0.6s ease-out both;
                }

                .hero h1 {
                    font-size: 1.875rem;
                    font-weight: 800;
                    line-height: 1.25;
                    letter-spacing: -0.01em;
                    margin: 0 0 2rem;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: #cbd5e1;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .hero-disc {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                    opacity: 0.05;
                    pointer-events: none;
                }

                .hero-disc-top {
                    top: -5rem;
                    right: -5rem;
                    background: #10b981;
                }

                .hero-disc-bottom {
                    bottom: -5rem;
                    left: -5rem;
                    background: #60a5fa;
                }

                @keyframes hero-enter {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                /* Problem */

                .problem {
                    background: #f8fafc;
                }

                .problem-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .problem-scenes {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .problem-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    background: #ffffff;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid #f1f5f9;
                    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06);
                }

                .problem-card i {
                    color: #f87171;
                    font-size: 1.5rem;
                    margin-top: 0.25rem;
                }

                .problem-card p {
                    margin: 0;
                    font-size: 1.125rem;
                    color: #334155;
                }

                .uncomfortable-truth {
                    margin-top: 4rem;
                    text-align: center;
                }

                .truth-lead {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1a3a4a;
                    margin: 0 0 1.5rem;
                }

                .truth-quote {
                    font-size: 1.125rem;
                    font-style: italic;
                    line-height: 1.7;
                    color: #475569;
                    margin: 0;
                }

                .symptom-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    margin-top: 3rem;
                }

                .symptom-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #f1f5f9;
                    padding: 1rem;
                    border-radius: 0.75rem;
                }

                .symptom-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #f87171;
                    flex-shrink: 0;
                }

                .symptom-text {
                    font-weight: 500;
                    color: #334155;
                }

                /* Emotional connection */

                .emotional {
                    background: #ffffff;
                }

                .emotional-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .emotional-question {
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                    color: #1e293b;
                    margin: 0 0 2rem;
                }

                .emotional-copy {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #475569;
                    margin: 0 0 3rem;
                }

                .truth-panel {
                    background: #f0f9ff;
                    border: 1px solid #dbeafe;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: left;
                }

                .truth-panel-lead {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1e3a8a;
                    margin: 0 0 1.5rem;
                }

                .truth-panel-body {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #1e40af;
                    margin: 0 0 2rem;
                }

                .truth-panel-hope {
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #1e3a8a;
                    margin: 0;
                }

                /* Solution */

                .solution {
                    background: #1a3a4a;
                    color: #ffffff;
                }

                .solution-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .solution-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .solution-badge {
                    display: inline-block;
                    background: #10b981;
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }

                .solution-title {
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.2;
                    margin: 0 0 1.5rem;
                }

                .solution-subtitle {
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: #cbd5e1;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .pillar-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .pillar-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: background 0.3s ease;
                }

                .pillar-card:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .pillar-card i {
                    color: #10b981;
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .pillar-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }

                .pillar-card p {
                    color: #94a3b8;
                    line-height: 1.7;
                    margin: 0;
                }

                .expert-quote {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    margin-top: 5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                }

                .expert-quote img {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 9999px;
                    border: 4px solid #10b981;
                    object-fit: cover;
                }

                .expert-line {
                    font-size: 1.125rem;
                    font-style: italic;
                    color: #cbd5e1;
                    margin: 0 0 0.5rem;
                }

                .expert-byline {
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0;
                }

                /* Benefits */

                .benefits {
                    background: #ffffff;
                }

                .benefits-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .benefit-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-top: 4rem;
                }

                .benefit-card {
                    background: rgba(248, 250, 252, 0.5);
                    border: 1px solid #f1f5f9;
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: box-shadow 0.3s ease, opacity 0.6s ease, transform 0.6s ease;
                }

                .benefit-card:hover {
                    box-shadow: 0 4px 6px -1px rgba(15, 23, 42, 0.1);
                }

                .benefit-card i {
                    color: #10b981;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .benefit-card h4 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1e293b;
                    margin: 0 0 0.5rem;
                }

                .benefit-card p {
                    font-size: 0.875rem;
                    line-height: 1.7;
                    color: #475569;
                    margin: 0;
                }

                /* Book contents */

                .book-contents {
                    background: #0f172a;
                    color: #ffffff;
                }

                .contents-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .contents-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-top: 4rem;
                }

                .contents-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 1rem;
                }

                .contents-row i {
                    color: #10b981;
                    font-size: 1.25rem;
                    flex-shrink: 0;
                }

                .contents-row p {
                    color: #cbd5e1;
                    margin: 0;
                }

                /* Phases */

                .phases {
                    background: #ffffff;
                }

                .phases-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .phase-track {
                    position: relative;
                    margin-top: 5rem;
                }

                .phase-line {
                    display: none;
                }

                .phase-grid {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }

                .phase-step {
                    text-align: center;
                }

                .phase-circle {
                    width: 4rem;
                    height: 4rem;
                    background: #1a3a4a;
                    color: #ffffff;
                    border-radius: 9999px;
                    border: 4px solid #ffffff;
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .phase-label {
                    color: #10b981;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    margin: 0 0 0.5rem;
                }

                .phase-title {
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #1e293b;
                    margin: 0 0 1rem;
                }

                .phase-desc {
                    font-size: 0.875rem;
                    line-height: 1.7;
                    color: #475569;
                    margin: 0 0 1rem;
                }

                .phase-result {
                    background: #f8fafc;
                    border: 1px solid #f1f5f9;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                }

                .phase-result-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #64748b;
                    margin: 0 0 0.25rem;
                }

                .phase-result-text {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #1e293b;
                    margin: 0;
                }

                /* Transformation */

                .transformation {
                    background: #f8fafc;
                }

                .transformation-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .compare-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-top: 4rem;
                }

                .before-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06);
                }

                .before-card h4 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ef4444;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 2rem;
                }

                .before-card ul,
                .after-card ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .before-card li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    color: #64748b;
                    font-size: 0.875rem;
                }

                .bullet-dot {
                    margin-top: 0.125rem;
                }

                .after-card {
                    background: #1a3a4a;
                    border: 1px solid #1a3a4a;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    color: #ffffff;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.25);
                }

                .after-card h4 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #10b981;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 2rem;
                }

                .after-card li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    color: #e2e8f0;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .after-card li i {
                    color: #10b981;
                    margin-top: 0.125rem;
                    flex-shrink: 0;
                }

                /* Testimonials */

                .testimonials {
                    background: #ffffff;
                    overflow: hidden;
                }

                .testimonials-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-top: 4rem;
                }

                .testimonial-card {
                    position: relative;
                    background: #f8fafc;
                    border: 1px solid #f1f5f9;
                    border-radius: 1rem;
                    padding: 2rem;
                }

                .testimonial-star {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    color: #facc15;
                    font-size: 1.25rem;
                }

                .testimonial-quote {
                    font-style: italic;
                    line-height: 1.7;
                    color: #475569;
                    margin: 0 0 2rem;
                }

                .testimonial-name {
                    font-weight: 700;
                    color: #1e293b;
                    margin: 0;
                }

                .testimonial-meta {
                    font-size: 0.75rem;
                    color: #64748b;
                    margin: 0.25rem 0 0;
                }

                /* Pricing */

                .pricing {
                    background: #1a3a4a;
                    color: #ffffff;
                }

                .pricing-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .pricing-card {
                    position: relative;
                    overflow: hidden;
                    background: #ffffff;
                    color: #0f172a;
                    border-radius: 3rem;
                    padding: 2.5rem;
                    margin-top: 3rem;
                    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.4);
                }

                .pricing-ribbon {
                    position: absolute;
                    top: 0;
                    right: 0;
                    background: #10b981;
                    color: #ffffff;
                    padding: 0.5rem 2rem;
                    border-bottom-left-radius: 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }

                .pricing-eyebrow {
                    color: #64748b;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin: 1.5rem 0 1rem;
                }

                .price-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                }

                .price-old {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #94a3b8;
                    text-decoration: line-through;
                    margin-right: 1rem;
                }

                .price-now {
                    font-size: 3.75rem;
                    font-weight: 900;
                    color: #1a3a4a;
                }

                .price-currency {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #64748b;
                    margin-left: 0.5rem;
                }

                .includes-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 28rem;
                    margin: 0 auto 3rem;
                    text-align: left;
                }

                .includes-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .includes-row i {
                    color: #10b981;
                    flex-shrink: 0;
                }

                .includes-row span {
                    color: #334155;
                    font-weight: 500;
                }

                .pricing-cta {
                    padding: 1.5rem 3rem;
                    font-size: 1.25rem;
                }

                .secure-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                    color: #94a3b8;
                }

                .secure-row span {
                    font-size: 0.75rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }

                /* Guarantee */

                .guarantee {
                    background: #ffffff;
                    padding-top: 5rem;
                    padding-bottom: 5rem;
                }

                .guarantee-panel {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #f8fafc;
                    border: 2px dashed #e2e8f0;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }

                .guarantee-badge {
                    width: 10rem;
                    height: 10rem;
                    flex-shrink: 0;
                    background: #ffffff;
                    border: 4px solid #10b981;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: inset 0 2px 8px rgba(15, 23, 42, 0.08);
                }

                .guarantee-badge i {
                    color: #10b981;
                    font-size: 4rem;
                }

                .guarantee-text h3 {
                    font-size: 1.5rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: -0.01em;
                    color: #1e293b;
                    margin: 0 0 1rem;
                }

                .guarantee-text p {
                    line-height: 1.7;
                    color: #475569;
                    margin: 0 0 1.5rem;
                }

                .guarantee-closing {
                    font-weight: 700;
                    color: #1a3a4a;
                }

                /* FAQ */

                .faq-block {
                    background: #ffffff;
                }

                .faq-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-list {
                    margin-top: 3rem;
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                    padding: 1rem 0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    padding: 0;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1e293b;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: #1a3a4a;
                }

                .faq-chevron {
                    flex-shrink: 0;
                    margin-left: 0.5rem;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    overflow: hidden;
                }

                .faq-answer.opening {
                    animation: answer-open 0.35s ease forwards;
                }

                .faq-answer.closing {
                    animation: answer-close 0.35s ease forwards;
                }

                .faq-answer-body {
                    margin-top: 1rem;
                }

                .faq-answer-body p {
                    color: #475569;
                    line-height: 1.7;
                    margin: 0;
                }

                @keyframes answer-open {
                    from {
                        max-height: 0;
                        opacity: 0;
                    }
                    to {
                        max-height: 24rem;
                        opacity: 1;
                    }
                }

                @keyframes answer-close {
                    from {
                        max-height: 24rem;
                        opacity: 1;
                    }
                    to {
                        max-height: 0;
                        opacity: 0;
                    }
                }

                /* Author */

                .author {
                    background: #f8fafc;
                }

                .author-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .author-portrait {
                    width: 16rem;
                    height: 16rem;
                    flex-shrink: 0;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.35);
                    transform: rotate(3deg);
                }

                .author-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .author-eyebrow {
                    display: block;
                    color: #10b981;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin-bottom: 0.5rem;
                }

                .author-bio h3 {
                    font-size: 1.875rem;
                    font-weight: 800;
                    color: #0f172a;
                    margin: 0 0 1.5rem;
                }

                .author-role {
                    font-weight: 700;
                    color: #334155;
                    margin: 0 0 1rem;
                }

                .author-copy {
                    line-height: 1.7;
                    color: #475569;
                    margin: 0 0 1.5rem;
                }

                .author-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .author-tag {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #64748b;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                /* Final CTA */

                .final-cta {
                    position: relative;
                    background: #1a3a4a;
                    color: #ffffff;
                    text-align: center;
                    overflow: hidden;
                }

                .final-cta-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .final-cta h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    line-height: 1.2;
                    margin: 0 0 2rem;
                }

                .final-copy {
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: #cbd5e1;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .final-button {
                    padding: 2rem 4rem;
                    font-size: 1.5rem;
                }

                .final-aphorism {
                    margin: 2rem 0 0;
                    font-size: 0.875rem;
                    font-style: italic;
                    color: #94a3b8;
                }

                .cta-rings {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.1;
                    pointer-events: none;
                }

                .ring-small {
                    position: absolute;
                    top: 2.5rem;
                    left: 2.5rem;
                    width: 8rem;
                    height: 8rem;
                    border: 1px solid #ffffff;
                    border-radius: 9999px;
                }

                .ring-medium {
                    position: absolute;
                    bottom: 5rem;
                    right: 5rem;
                    width: 16rem;
                    height: 16rem;
                    border: 1px solid #ffffff;
                    border-radius: 9999px;
                }

                .ring-large {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 800px;
                    height: 800px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                }

                /* Footer */

                .landing-footer {
                    background: #0f172a;
                    color: #64748b;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding-top: 3rem;
                    padding-bottom: 3rem;
                }

                .footer-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .footer-copyright {
                    font-size: 0.875rem;
                    margin: 0 0 1rem;
                }

                .footer-disclaimer {
                    font-size: 0.75rem;
                    line-height: 1.7;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                @media (min-width: 768px) {
                    .hero {
                        padding-top: 8rem;
                        padding-bottom: 10rem;
                    }

                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                    }

                    .section-title {
                        font-size: 2.25rem;
                    }

                    .emotional-question {
                        font-size: 1.875rem;
                    }

                    .truth-panel {
                        padding: 3rem;
                    }

                    .solution-title {
                        font-size: 3rem;
                    }

                    .symptom-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .pillar-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .benefit-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .phase-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .phase-line {
                        display: block;
                        position: absolute;
                        top: 50%;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: #e2e8f0;
                        transform: translateY(-50%);
                    }

                    .compare-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .after-card {
                        transform: scale(1.05);
                    }

                    .testimonial-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .expert-quote {
                        flex-direction: row;
                        justify-content: center;
                        text-align: left;
                    }

                    .pricing-card {
                        padding: 4rem;
                    }

                    .price-now {
                        font-size: 6rem;
                    }

                    .guarantee-panel {
                        flex-direction: row;
                        padding: 4rem;
                        text-align: left;
                    }

                    .author-inner {
                        flex-direction: row;
                    }

                    .author-portrait {
                        width: 20rem;
                        height: 20rem;
                    }

                    .final-cta h2 {
                        font-size: 3.75rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .benefit-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .testimonial-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
