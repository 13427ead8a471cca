//! Static Italian/English strings of the page shell.

use super::language::Language;

/// How a catalog value is written into its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Text,
    Html,
}

/// One translatable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub markup: Markup,
    pub en: &'static str,
    pub it: &'static str,
}

impl CatalogEntry {
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::It => self.it,
        }
    }
}

const fn text(id: &'static str, en: &'static str, it: &'static str) -> CatalogEntry {
    CatalogEntry {
        id,
        markup: Markup::Text,
        en,
        it,
    }
}

const fn html(id: &'static str, en: &'static str, it: &'static str) -> CatalogEntry {
    CatalogEntry {
        id,
        markup: Markup::Html,
        en,
        it,
    }
}

const PACT_EN: &str = r#"
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">01.</span><span>I'm not an expert. I'm learning, publicly and messily.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">02.</span><span>I document failures as much as successes. Often more.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">03.</span><span>AI is my assistant, not my ghost writer. The curiosity is mine.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">04.</span><span>When I don't know something, I say so. Confusion is part of the log.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">05.</span><span>The magic isn't the result. It's the path to get there.</span></li>
"#;

const PACT_IT: &str = r#"
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">01.</span><span>Non sono un esperto. Sto imparando, pubblicamente e in modo disordinato.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">02.</span><span>Documento i fallimenti tanto quanto i successi. Spesso di più.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">03.</span><span>L'AI è il mio assistente, non il mio ghost writer. La curiosità è mia.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">04.</span><span>Quando non so qualcosa, lo dico. La confusione fa parte del log.</span></li>
          <li class="flex items-start gap-3"><span class="text-[#4ade80] font-mono-tech">05.</span><span>La magia non è il risultato. È il percorso per arrivarci.</span></li>
"#;

const WHO_BIO_EN: &str = r#"
          <p>I'm not a developer by profession. I'm not an expert in anything you'll find on this site. I'm just someone who gets curious about things and then can't stop until I've figured them out (or failed spectacularly trying).</p>
          <p>This site is my public notebook. A place where I document the <em>process</em> of learning, not just the results. Because I've realized that the interesting part is never the finished product. It's all the confusion, mistakes, and "aha" moments along the way.</p>
          <p>I work with AI as my assistant. Think of it like Watson to Sherlock, or Robin to Batman. The curiosity and direction are mine; the AI helps me translate messy ideas into working experiments. I believe this is the most honest way to work with these tools: acknowledge them, credit them, but don't let them replace the human spark.</p>
          <p class="text-[#fbbf24]">If you're here expecting polished tutorials or expert knowledge, you'll be disappointed. If you're here to watch someone learn in real-time, make mistakes, and occasionally figure things out: welcome home.</p>
"#;

const WHO_BIO_IT: &str = r#"
          <p>Non sono uno sviluppatore di professione. Non sono un esperto in nulla di ciò che troverai su questo sito. Sono solo una persona che si incuriosisce e poi non riesce a fermarsi finché non capisce (o fallisce spettacolarmente nel tentativo).</p>
          <p>Questo sito è il mio quaderno pubblico. Un posto dove documento il <em>processo</em> di apprendimento, non solo i risultati. Perché ho capito che la parte interessante non è mai il prodotto finito. Sono la confusione, gli errori e i momenti "aha" lungo il percorso.</p>
          <p>Lavoro con l'AI come assistente. Pensala come Watson per Sherlock, o Robin per Batman. La curiosità e la direzione sono mie; l'AI mi aiuta a tradurre idee disordinate in esperimenti funzionanti. Credo sia il modo più onesto di usare questi strumenti: riconoscerli, citarli, ma senza spegnere la scintilla umana.</p>
          <p class="text-[#fbbf24]">Se sei qui aspettandoti tutorial rifiniti o certezze da esperto, rimarrai deluso. Se sei qui per vedere qualcuno imparare in tempo reale, sbagliare e ogni tanto capirci qualcosa: benvenuto a casa.</p>
"#;

static CATALOG: &[CatalogEntry] = &[
    text(
        "hero-tagline",
        "Learning in public. Breaking things. Taking notes.",
        "Imparare in pubblico. Rompere le cose. Prendere appunti.",
    ),
    text(
        "hero-note",
        "// This site is itself a project in progress",
        "// Questo sito è esso stesso un progetto in corso",
    ),
    text("pact-title", "The Nerd's Pact", "Il Patto del Nerd"),
    html("pact-content", PACT_EN, PACT_IT),
    html(
        "lab-title",
        r#"<span class="text-[#4ade80]">&gt;</span> Lab"#,
        r#"<span class="text-[#4ade80]">&gt;</span> Lab"#,
    ),
    text(
        "lab-description",
        "Active experiments, ongoing projects, and things I'm currently breaking. Each project is a living document.",
        "Esperimenti attivi, progetti in corso e cose che sto attualmente rompendo. Ogni progetto è un documento vivo.",
    ),
    text("lab-subtitle", "All Projects", "Tutti i Progetti"),
    text(
        "lab-empty-text",
        "No lab projects yet",
        "Nessun progetto nel lab ancora",
    ),
    html(
        "incubator-title",
        r#"<span class="text-[#fbbf24]">&gt;</span> Incubator"#,
        r#"<span class="text-[#fbbf24]">&gt;</span> Incubatore"#,
    ),
    text(
        "incubator-description",
        "Ideas that haven't become projects yet. Mental experiments, future possibilities, things I'm curious about.",
        "Idee che non sono ancora diventate progetti. Esperimenti mentali, possibilità future, cose che mi incuriosiscono.",
    ),
    html(
        "toolbox-title",
        r#"<span class="text-[#8b5cf6]">&gt;</span> Toolbox"#,
        r#"<span class="text-[#8b5cf6]">&gt;</span> Toolbox"#,
    ),
    text(
        "toolbox-description",
        "Tools I actually use in my projects. Not reviews or recommendations, just context about what worked (or didn't) for me.",
        "Strumenti che uso effettivamente nei miei progetti. Non recensioni o raccomandazioni, solo contesto su cosa ha funzionato (o no) per me.",
    ),
    html(
        "who-title",
        r#"<span class="text-[#e8e8e8]">&gt;</span> Who is The Nerd?"#,
        r#"<span class="text-[#e8e8e8]">&gt;</span> Chi è The Nerd?"#,
    ),
    text("who-subtitle", "The Nerd", "The Nerd"),
    text(
        "who-tagline",
        "Curious human, professional learner",
        "Umano curioso, apprendista professionista",
    ),
    text("contact-title", "Get in Touch", "Contatti"),
    html("who-bio", WHO_BIO_EN, WHO_BIO_IT),
];

/// Every translatable element, in page order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}
