use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carnet::{Category, Config};

mod commands;

const LONG_ABOUT: &str = "\
Carnet est le carnet de recettes de la famille.

Les recettes sont rangées en trois catégories (Entrée, Plat, Dessert) et
chacune reçoit un id comme `plat_004`. Chaque membre de la famille se
connecte avec son prénom et le mot de passe commun, puis ajoute des
recettes, les modifie et laisse des commentaires. Chaque changement est
inscrit dans le journal d'activité.

Tout est gardé dans un dossier local (.carnet/ par défaut) : un fichier JSON
par collection (recipes, comments, modifications). Les recettes d'exemple
sont écrites la première fois que le carnet est ouvert vide.";

const AFTER_HELP: &str = "\
EXEMPLES:
    Se connecter:
        $ carnet login Aline --password 'jeveuxmanger!'

    Chercher les desserts aux pommes:
        $ carnet list --category dessert --query pommes

    Lire une recette et ses commentaires:
        $ carnet show plat_001

    Ajouter une recette:
        $ carnet add --category plat --title 'Gratin' \\
            --ingredient 'Pommes de terre|1 kg' --step 'Cuire|Enfourner 1 h'

    Voir l'activité récente:
        $ carnet activity

ENVIRONNEMENT:
    CARNET_DIR       Dossier des données (comme --data-dir)
    CARNET_PASSWORD  Mot de passe pour `login` si --password est absent
    CARNET_LOG       Filtre des logs, ex. `carnet=debug` (défaut: warn)";

#[derive(Parser)]
#[command(name = "carnet")]
#[command(version)]
#[command(about = "Carnet de recettes familial")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Dossier contenant le carnet
    #[arg(long, global = true, env = "CARNET_DIR", default_value = carnet::config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Écrire les recettes d'exemple si le carnet est vide
    Seed,

    /// Se connecter avec un prénom et le mot de passe commun
    Login {
        /// Prénom, exactement comme sur la liste de la famille
        name: String,

        #[arg(long, env = "CARNET_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Oublier la personne connectée
    Logout,

    /// Afficher la personne connectée
    Whoami,

    /// Lister les recettes, les plus récemment modifiées d'abord
    List {
        /// Seulement cette catégorie (entree, plat, dessert)
        #[arg(long)]
        category: Option<Category>,

        /// Chercher dans le titre, l'auteur et les ingrédients
        #[arg(long, short, default_value = "")]
        query: String,
    },

    /// Afficher une recette avec ses commentaires
    Show {
        id: String,
    },

    /// Ajouter une recette (connexion requise)
    Add {
        /// Catégorie (entree, plat, dessert)
        #[arg(long)]
        category: Category,

        #[command(flatten)]
        fields: commands::RecipeFields,
    },

    /// Modifier une recette; les champs omis restent inchangés (connexion requise)
    Edit {
        id: String,

        /// Changer de catégorie; l'id reste le même
        #[arg(long)]
        category: Option<Category>,

        #[command(flatten)]
        fields: commands::RecipeFields,
    },

    /// Commenter une recette (connexion requise)
    Comment {
        id: String,
        text: String,
    },

    /// Activité récente, la plus récente d'abord (connexion requise)
    Activity {
        #[arg(long, short = 'n', default_value_t = commands::activity::HOME_ACTIVITY_LIMIT)]
        limit: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CARNET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::new(cli.data_dir);

    let result = match cli.command {
        Commands::Seed => commands::seed::run(&config),
        Commands::Login { name, password } => commands::session::login(&config, &name, &password),
        Commands::Logout => commands::session::logout(&config),
        Commands::Whoami => commands::session::whoami(&config),
        Commands::List { category, query } => commands::list::run(&config, category, &query),
        Commands::Show { id } => commands::show::run(&config, &id),
        Commands::Add { category, fields } => commands::add::run(&config, category, fields),
        Commands::Edit {
            id,
            category,
            fields,
        } => commands::edit::run(&config, &id, category, fields),
        Commands::Comment { id, text } => commands::comment::run(&config, &id, &text),
        Commands::Activity { limit } => commands::activity::run(&config, limit),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Erreur: {}", e);
        std::process::exit(1);
    }
}
