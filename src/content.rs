// Fixed campaign copy. The page renders these tables in display order;
// nothing here carries state.

pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct BookItem {
    pub icon: &'static str,
    pub text: &'static str,
}

pub struct PhaseStep {
    pub label: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub result: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub age: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PROBLEM_SCENES: &[&str] = &[
    "Te despiertas cansado aunque hayas dormido 7 horas. La mente ya está acelerada antes de que suene la alarma.",
    "Durante el día, saltas de una tarea a otra sin realmente terminar ninguna. El celular no para de vibrar.",
    "Cuando finalmente llegas a casa, tu cuerpo pide descanso pero tu mente no puede apagarse.",
];

pub const SYMPTOMS: &[&str] = &[
    "Mentalmente agotado",
    "Irritable con seres queridos",
    "Incapaz de concentrarte",
    "Constantemente preocupado",
    "Atrapado en el estrés",
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "fa-solid fa-heart-pulse",
        title: "1. Regulación Corporal",
        desc: "Aprenderás cómo tu cuerpo almacena el estrés y las técnicas específicas para liberarlo.",
    },
    Pillar {
        icon: "fa-solid fa-brain",
        title: "2. Reprogramación Mental",
        desc: "Descubrirás cómo establecer límites saludables, gestionar el agotamiento y recuperar tu enfoque.",
    },
    Pillar {
        icon: "fa-solid fa-arrows-rotate",
        title: "3. Rutinas Sostenibles",
        desc: "Construirás hábitos que previenen la recaída del estrés, creando un estilo de vida equilibrado.",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "fa-solid fa-bolt",
        title: "Regulación Natural",
        desc: "Pasarás del estado de 'lucha o huida' a un estado de calma funcional.",
    },
    Benefit {
        icon: "fa-solid fa-chart-column",
        title: "Energía Recuperada",
        desc: "Despertarás sintiéndote realmente descansado y con mente clara.",
    },
    Benefit {
        icon: "fa-solid fa-moon",
        title: "Sueño Reparador",
        desc: "Técnicas exactas para optimizar tu descanso y eliminar el insomnio.",
    },
    Benefit {
        icon: "fa-solid fa-shield-halved",
        title: "Límites Saludables",
        desc: "Aprenderás a decir 'no' sin culpa y proteger tu paz mental.",
    },
    Benefit {
        icon: "fa-solid fa-heart",
        title: "Paz Interior",
        desc: "Desactivarás los patrones mentales que mantienen tu ansiedad activa.",
    },
    Benefit {
        icon: "fa-solid fa-mobile-screen-button",
        title: "Detox Digital",
        desc: "Romperás la adicción al celular que sobreestimula tu sistema.",
    },
    Benefit {
        icon: "fa-solid fa-arrows-rotate",
        title: "Hábitos Sostenibles",
        desc: "Un estilo de vida que naturalmente previene el regreso del estrés.",
    },
    Benefit {
        icon: "fa-solid fa-sun",
        title: "Presencia Real",
        desc: "Recuperarás la capacidad de sentir y estar presente en el ahora.",
    },
    Benefit {
        icon: "fa-solid fa-users",
        title: "Mejores Relaciones",
        desc: "Dejarás de proyectar irritabilidad en las personas que amas.",
    },
];

pub const BOOK_CONTENTS: &[BookItem] = &[
    BookItem {
        icon: "fa-solid fa-book-open",
        text: "Un sistema completo de regulación del estrés estructurado en capítulos progresivos.",
    },
    BookItem {
        icon: "fa-solid fa-brain",
        text: "Fundamentos científicos explicados de forma simple para que entiendas el POR QUÉ.",
    },
    BookItem {
        icon: "fa-solid fa-wrench",
        text: "Ejercicios prácticos y aplicables inmediatamente sin equipos especiales.",
    },
    BookItem {
        icon: "fa-solid fa-moon",
        text: "Protocolo completo de optimización del sueño para cada tipo de problema.",
    },
    BookItem {
        icon: "fa-solid fa-utensils",
        text: "Guía de alimentación para la regulación emocional y reducción de ansiedad.",
    },
    BookItem {
        icon: "fa-solid fa-heart-pulse",
        text: "Estrategias de movimiento inteligente para liberar tensión acumulada.",
    },
    BookItem {
        icon: "fa-solid fa-mobile-screen-button",
        text: "Plan de detox digital sostenible para recuperar tu atención.",
    },
    BookItem {
        icon: "fa-solid fa-heart",
        text: "Técnicas de regulación emocional en tiempo real para momentos de crisis.",
    },
    BookItem {
        icon: "fa-solid fa-scale-balanced",
        text: "Sistema para establecer límites saludables con scripts y ejemplos concretos.",
    },
];

pub const PHASES: &[PhaseStep] = &[
    PhaseStep {
        label: "FASE 1",
        title: "Comprensión y Evaluación",
        desc: "Entenderás exactamente qué le está pasando a tu cuerpo y mente. Identificarás tus desencadenantes principales.",
        result: "Claridad total sobre tu situación actual.",
    },
    PhaseStep {
        label: "FASE 2",
        title: "Regulación Corporal",
        desc: "Implementarás las bases: sueño, alimentación, movimiento y desconexión digital estratégica.",
        result: "Mayor energía y reducción de tensión física.",
    },
    PhaseStep {
        label: "FASE 3",
        title: "Reprogramación Mental",
        desc: "Técnicas de gestión emocional, límites y construcción de rutinas sostenibles personalizadas.",
        result: "Equilibrio sostenible y paz natural.",
    },
];

pub const BEFORE_ITEMS: &[&str] = &[
    "Despiertas ya ansioso y acelerado",
    "Sueño superficial y poco reparador",
    "Revisas el celular compulsivamente",
    "Irritabilidad con seres queridos",
    "Mente en bucle constante",
    "Vives en piloto automático",
];

pub const AFTER_ITEMS: &[&str] = &[
    "Despiertas tranquilo y con energía",
    "Sueño profundo y reparador",
    "Control consciente de la tecnología",
    "Paciencia y amor con los demás",
    "Mente clara, enfocada y presente",
    "Disfrutas los pequeños momentos",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ana Sofía Reyes",
        age: "36 años",
        role: "Gerente de Marketing",
        quote: "Recuperé mi capacidad de disfrutar la vida. Empecé con el protocolo de sueño y en 10 días ya dormía mejor que en años. Siento que volví a ser yo.",
    },
    Testimonial {
        name: "Roberto Fernández",
        age: "42 años",
        role: "Ingeniero de Software",
        quote: "Soy ingeniero, necesito cosas que tengan lógica. Este libro cumplió ambas. Las técnicas de regulación corporal me ayudaron a liberar tensión que ni sabía que tenía.",
    },
    Testimonial {
        name: "Laura Mendoza",
        age: "29 años",
        role: "Diseñadora Gráfica",
        quote: "Finalmente entiendo cómo funciona mi ansiedad. Me encantó que no minimiza el problema. Te enseña paso a paso qué hacer.",
    },
];

pub const PRICE_INCLUDES: &[&str] = &[
    "Sistema completo de regulación del estrés",
    "Protocolos de sueño, alimentación y movimiento",
    "Técnicas de regulación en tiempo real",
    "Guía de límites saludables",
    "Acceso instantáneo de por vida",
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "¿Este libro es para mí si nunca he leído sobre bienestar?",
        answer: "Absolutamente sí. Está diseñado específicamente para personas sin conocimientos previos. Todo se explica en lenguaje claro, sin jerga técnica innecesaria.",
    },
    FaqEntry {
        question: "¿Cuánto tiempo necesito dedicarle cada día?",
        answer: "No necesitas horas libres. Puedes empezar con solo 10-15 minutos diarios. Las estrategias están diseñadas para integrarse en tu rutina actual.",
    },
    FaqEntry {
        question: "¿Esto reemplaza la terapia psicológica?",
        answer: "No. Es una herramienta de autocuidado para el manejo del estrés cotidiano. Si experimentas condiciones severas, busca ayuda profesional. Muchas personas lo usan como complemento a su terapia.",
    },
    FaqEntry {
        question: "¿Qué formato tiene el libro?",
        answer: "Es un ebook en formato digital PDF que recibes inmediatamente después de tu compra por correo electrónico.",
    },
];

pub const AUTHOR_TAGS: &[&str] = &[
    "+10 años de experiencia",
    "Enfoque basado en evidencia",
    "Sostenibilidad real",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_filled(label: &str, values: &[&str]) {
        for value in values {
            assert!(!value.trim().is_empty(), "{} holds a blank entry", label);
        }
    }

    #[test]
    fn section_tables_match_page_design() {
        assert_eq!(PROBLEM_SCENES.len(), 3);
        assert_eq!(SYMPTOMS.len(), 5);
        assert_eq!(PILLARS.len(), 3);
        assert_eq!(BENEFITS.len(), 9);
        assert_eq!(BOOK_CONTENTS.len(), 9);
        assert_eq!(PHASES.len(), 3);
        assert_eq!(BEFORE_ITEMS.len(), 6);
        assert_eq!(AFTER_ITEMS.len(), 6);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(PRICE_INCLUDES.len(), 5);
        assert_eq!(FAQ_ENTRIES.len(), 4);
        assert_eq!(AUTHOR_TAGS.len(), 3);
    }

    #[test]
    fn no_table_holds_blank_copy() {
        assert_filled("PROBLEM_SCENES", PROBLEM_SCENES);
        assert_filled("SYMPTOMS", SYMPTOMS);
        assert_filled("BEFORE_ITEMS", BEFORE_ITEMS);
        assert_filled("AFTER_ITEMS", AFTER_ITEMS);
        assert_filled("PRICE_INCLUDES", PRICE_INCLUDES);
        assert_filled("AUTHOR_TAGS", AUTHOR_TAGS);
        for benefit in BENEFITS {
            assert!(!benefit.icon.is_empty() && !benefit.title.is_empty() && !benefit.desc.is_empty());
        }
        for item in BOOK_CONTENTS {
            assert!(!item.icon.is_empty() && !item.text.is_empty());
        }
        for entry in FAQ_ENTRIES {
            assert!(!entry.question.is_empty() && !entry.answer.is_empty());
        }
    }
}
