use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use additive_fft::{
    BinaryField, Gf16, Gf256, Gf65536, OperatorConfig, Polynomial, PolynomialMultiplier, Psi,
};

#[derive(Parser, Debug)]
#[command(name = "additive-fft", about = "Additive FFT over binary extension fields")]
struct Cli {
    #[command(flatten)]
    operator: OperatorArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OperatorArgs {
    /// Field to compute in.
    #[arg(long, value_enum, default_value_t = FieldKind::Gf16, global = true)]
    field: FieldKind,
    /// Number of basis vectors (default: the field's extension degree).
    #[arg(long, global = true)]
    degree: Option<usize>,
    /// Shift β of the evaluation coset, as an integer.
    #[arg(long, default_value_t = 0, global = true)]
    shift: u64,
    /// Coefficients are in the normalized basis.
    #[arg(long, global = true)]
    normalized: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldKind {
    /// GF(2^4), x^4 + x + 1
    Gf16,
    /// GF(2^8), x^8 + x^4 + x^3 + x^2 + 1
    Gf256,
    /// GF(2^16), x^16 + x^12 + x^3 + x + 1
    Gf65536,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a polynomial on the shifted subspace.
    Transform {
        /// Coefficients, low to high (zero-padded to a power of two).
        #[arg(required = true)]
        coeffs: Vec<u64>,
        /// Cross-check every output against direct evaluation.
        #[arg(long)]
        verify: bool,
    },
    /// Interpolate coefficients from 2^k evaluations.
    Inverse {
        /// Evaluations in output-index order.
        #[arg(required = true)]
        evals: Vec<u64>,
    },
    /// Multiply two polynomials via evaluate–multiply–interpolate.
    Multiply {
        /// Left operand coefficients, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        lhs: Vec<u64>,
        /// Right operand coefficients, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        rhs: Vec<u64>,
        /// Strip trailing zero coefficients.
        #[arg(long)]
        trim: bool,
    },
    /// Print the normalization constants p_i.
    Table,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.operator.field {
        FieldKind::Gf16 => run::<Gf16>(&cli.operator, cli.command),
        FieldKind::Gf256 => run::<Gf256>(&cli.operator, cli.command),
        FieldKind::Gf65536 => run::<Gf65536>(&cli.operator, cli.command),
    }
}

fn run<F: BinaryField>(args: &OperatorArgs, command: Commands) -> Result<()> {
    let config = OperatorConfig::for_field::<F>()
        .with_degree(args.degree.unwrap_or(F::DEGREE as usize))
        .with_shift(args.shift)
        .with_normalized(args.normalized);
    let psi = Psi::<F>::from_config(&config)
        .with_context(|| format!("failed to build operator from {:?}", config))?;
    info!(degree = psi.degree(), shift = %psi.shift(), "operator ready");

    match command {
        Commands::Transform { coeffs, verify } => run_transform(&psi, &config, &coeffs, verify),
        Commands::Inverse { evals } => run_inverse(&psi, &config, &evals),
        Commands::Multiply { lhs, rhs, trim } => run_multiply(&psi, &config, &lhs, &rhs, trim),
        Commands::Table => {
            println!("{}", render(psi.normalization().constants()));
            Ok(())
        }
    }
}

fn run_transform<F: BinaryField>(
    psi: &Psi<F>,
    config: &OperatorConfig,
    coeffs: &[u64],
    verify: bool,
) -> Result<()> {
    let poly = Polynomial::<F>::from_bits(coeffs).context("invalid coefficient")?;
    let k = poly.msb();
    let padded = poly.padded(k)?;
    let evals = psi
        .transform(&padded, k, config.normalized)
        .context("transform failed")?;

    if verify {
        for (i, value) in evals.iter().enumerate() {
            let expected = poly.evaluate(psi.basis(), psi.point(i), config.normalized)?;
            if expected != *value {
                bail!(
                    "evaluation {} at point {} disagrees: transform {} vs direct {}",
                    i,
                    psi.point(i),
                    value,
                    expected
                );
            }
        }
    }

    let points: Vec<F> = (0..evals.len()).map(|i| psi.point(i)).collect();
    println!("points\t{}", render(&points));
    println!("evals\t{}", render(&evals));
    Ok(())
}

fn run_inverse<F: BinaryField>(psi: &Psi<F>, config: &OperatorConfig, evals: &[u64]) -> Result<()> {
    let evals = Polynomial::<F>::from_bits(evals)
        .context("invalid evaluation")?
        .into_coeffs();
    let k = additive_fft::util::msb(evals.len() - 1);
    let coeffs = psi
        .inverse(&evals, k, config.normalized)
        .context("inverse transform failed")?;
    println!("coeffs\t{}", render(&coeffs));
    Ok(())
}

fn run_multiply<F: BinaryField>(
    psi: &Psi<F>,
    config: &OperatorConfig,
    lhs: &[u64],
    rhs: &[u64],
    trim: bool,
) -> Result<()> {
    let lhs = Polynomial::<F>::from_bits(lhs).context("invalid left operand")?;
    let rhs = Polynomial::<F>::from_bits(rhs).context("invalid right operand")?;
    let product = PolynomialMultiplier::new(psi)
        .with_normalized(config.normalized)
        .with_trim(trim)
        .multiply(&lhs, &rhs)
        .context("multiplication failed")?;
    println!("product\t{}", product);
    Ok(())
}

fn render<F: BinaryField>(values: &[F]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
