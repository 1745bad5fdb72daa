use std::collections::BTreeMap;
use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use lesson::api::ContentClient;
use lesson::config::Config;
use lesson::content::{
    option_index, option_label, ContentType, DisplayBlock, GlossaryTerm, Heading, QuizOption,
};
use lesson::session::{
    ExerciseSession, OptionMark, QuizSession, Screen, ScreenSlot, SlotState,
};
use log::error;
use serde::Serialize;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const USAGE: &str = "Usage: study grades | topics <grade_id> | modules <topic_id> | show <module_id> <content_type> [--yaml]";

enum Command {
    Grades,
    Topics(String),
    Modules(String),
    Show {
        module_id: String,
        content_type: ContentType,
        yaml: bool,
    },
}

fn parse_command(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let command = args.next().context("a command is required")?;
    match command.as_str() {
        "grades" => Ok(Command::Grades),
        "topics" => Ok(Command::Topics(args.next().context("grade_id is required")?)),
        "modules" => Ok(Command::Modules(args.next().context("topic_id is required")?)),
        "show" => {
            let module_id = args.next().context("module_id is required")?;
            let content_type = args
                .next()
                .context("content_type is required")?
                .parse::<ContentType>()?;
            let yaml = args.next().is_some_and(|flag| flag == "--yaml");
            Ok(Command::Show {
                module_id,
                content_type,
                yaml,
            })
        }
        other => Err(anyhow::anyhow!("unknown command '{}'", other)),
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let command = match parse_command(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e);
        }
    };

    let config = Config::from_env().context("failed to read configuration")?;
    let client = ContentClient::new(&config);

    match command {
        Command::Grades => {
            for grade in client.grades()?.iter().filter(|g| g.is_active) {
                println!("{BOLD}{}{RESET}  {}  [{}]", grade.grade_name, grade.description, grade.id);
            }
        }
        Command::Topics(grade_id) => {
            let mut topics = client.topics(&grade_id)?;
            topics.sort_by_key(|t| t.order);
            for topic in topics.iter().filter(|t| t.is_active) {
                println!("{}. {BOLD}{}{RESET}  {}  [{}]", topic.order, topic.name, topic.description, topic.id);
            }
        }
        Command::Modules(topic_id) => {
            let mut modules = client.modules(&topic_id)?;
            modules.sort_by_key(|m| m.order);
            for module in modules.iter().filter(|m| m.is_active) {
                let badge = if module.content_available { "" } else { "  (próximamente)" };
                println!("{}. {BOLD}{}{RESET}{}  [{}]", module.order, module.name, badge, module.id);
            }
        }
        Command::Show {
            module_id,
            content_type,
            yaml,
        } => show(&client, &module_id, content_type, yaml)?,
    }

    Ok(())
}

fn show(
    client: &ContentClient,
    module_id: &str,
    content_type: ContentType,
    yaml: bool,
) -> anyhow::Result<()> {
    let mut slot = ScreenSlot::new();
    let ticket = slot.begin_load();
    let content = client.content(module_id, content_type).unwrap_or_else(|e| {
        error!("{:#}", e);
        None
    });
    slot.finish_load(ticket, content);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if let SlotState::NotFound = slot.state() {
        println!("{BOLD}Contenido no encontrado{RESET}");
        println!("El contenido solicitado no está disponible.");
    }

    match slot.screen_mut() {
        None => {}
        Some(Screen::Empty) => println!("No hay contenido para mostrar."),
        Some(Screen::Glossary(terms)) => render_glossary(terms),
        Some(Screen::Theory { blocks, outline }) => {
            if yaml {
                print_theory_yaml(outline, blocks)?;
            } else {
                render_theory(blocks);
            }
        }
        Some(Screen::Exercises { kind, session }) => run_exercises(*kind, session, &mut input)?,
        Some(Screen::Quiz(quiz)) => run_quiz(quiz, &mut input)?,
    }

    slot.unmount();
    Ok(())
}

fn render_glossary(terms: &[GlossaryTerm]) {
    println!("{BOLD}Glosario de términos{RESET}\n");
    for term in terms {
        println!("{BOLD}{}{RESET}", term.term);
        println!("{}", term.definition);
        if let Some(example) = &term.example {
            println!("  Ejemplo: {}", example);
        }
        println!();
    }
}

fn render_theory(blocks: &[DisplayBlock]) {
    println!("{BOLD}Teoría explicativa{RESET}\n");
    for block in blocks {
        match block {
            DisplayBlock::Heading1(text) => println!("{BOLD}{}{RESET}", text.to_uppercase()),
            DisplayBlock::Heading2(text) => println!("{BOLD}{}{RESET}", text),
            DisplayBlock::Heading3(text) => println!("{BOLD}  {}{RESET}", text),
            DisplayBlock::BulletItem(text) => println!("  • {}", text),
            DisplayBlock::BoldParagraph(text) => println!("{BOLD}{}{RESET}", text),
            DisplayBlock::PlainParagraph(text) => println!("{}", text),
            DisplayBlock::BlankLine => println!(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum TheoryDump<'a> {
    Outline(&'a [Heading]),
    Blocks(&'a [DisplayBlock]),
}

fn print_theory_yaml(outline: &[Heading], blocks: &[DisplayBlock]) -> anyhow::Result<()> {
    let mut dump = BTreeMap::<&str, TheoryDump>::new();
    dump.insert("outline", TheoryDump::Outline(outline));
    dump.insert("blocks", TheoryDump::Blocks(blocks));

    print!(
        "{}",
        serde_yaml_ng::to_string(&dump).context("failed to serialize theory")?
    );
    Ok(())
}

fn print_options(options: &[QuizOption], mark: impl Fn(usize) -> OptionMark) {
    for (index, option) in options.iter().enumerate() {
        let line = format!("{}. {}", option_label(index), option.text);
        match mark(index) {
            OptionMark::Idle => println!("   {}", line),
            OptionMark::Selected => println!(" > {BOLD}{}{RESET}", line),
            OptionMark::Correct => println!(" ✓ {GREEN}{}{RESET}", line),
            OptionMark::Incorrect => println!(" ✗ {RED}{}{RESET}", line),
        }
    }
}

/// Reads option labels until one is valid, `None` on end of input.
fn read_choice(input: &mut impl BufRead, option_count: usize) -> anyhow::Result<Option<usize>> {
    loop {
        print!("Respuesta: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read answer")? == 0 {
            return Ok(None);
        }
        match option_index(&line, option_count) {
            Some(index) => return Ok(Some(index)),
            None => println!(
                "Elige una opción entre A y {} (o su número, de 1 a {})",
                option_label(option_count.saturating_sub(1)),
                option_count
            ),
        }
    }
}

fn run_exercises(
    kind: ContentType,
    session: &mut ExerciseSession,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    let title = match kind {
        ContentType::LearningExercises => "Ejercicios de aprendizaje",
        _ => "Ejercicios de práctica",
    };
    println!("{BOLD}{}{RESET}\n", title);

    for index in 0..session.exercises().len() {
        let exercise = &session.exercises()[index];
        println!("{BOLD}Ejercicio {}{RESET}  ({})", index + 1, exercise.difficulty);
        println!("{}", exercise.problem);
        print_options(&exercise.options, |o| session.option_mark(index, o));

        let option_count = exercise.options.len();
        if option_count == 0 {
            continue;
        }
        let Some(choice) = read_choice(input, option_count)? else {
            return Ok(());
        };
        // out of range picks are already logged by the session
        let _ = session.select(index, choice);

        if let Some(explanation) = session.explanation(index) {
            println!("{BOLD}Explicación:{RESET} {}\n", explanation);
        }
    }

    Ok(())
}

fn run_quiz(quiz: &mut QuizSession, input: &mut impl BufRead) -> anyhow::Result<()> {
    println!("{BOLD}Quiz de evaluación{RESET}\n");

    for index in 0..quiz.questions().len() {
        let question = &quiz.questions()[index];
        println!("{BOLD}Pregunta {}{RESET}", index + 1);
        println!("{}", question.question);
        print_options(&question.options, |o| quiz.option_mark(index, o));

        let option_count = question.options.len();
        if option_count == 0 {
            continue;
        }
        let Some(choice) = read_choice(input, option_count)? else {
            return Ok(());
        };
        let _ = quiz.select(index, choice);
        println!();
    }

    if !quiz.can_submit() {
        println!("Responde todas las preguntas para enviar el quiz.");
        return Ok(());
    }

    let report = quiz.submit();
    println!("{BOLD}Resultados del Quiz{RESET}");
    println!("{BOLD}{}%{RESET}  {}/{} correctas", report.score, report.correct, report.total);
    println!("{}\n", report.verdict);

    for (index, question) in quiz.questions().iter().enumerate() {
        println!("{BOLD}Pregunta {}{RESET}  {}", index + 1, question.question);
        print_options(&question.options, |o| quiz.option_mark(index, o));
        if let Some(explanation) = quiz.explanation(index) {
            println!("{BOLD}Explicación:{RESET} {}\n", explanation);
        }
    }

    Ok(())
}
