use ardbox_kernel::{Kernel, SquaredExpArd};
use env_logger::{Builder, Env};
use ndarray::{array, Axis};

fn main() {
    let env = Env::new().filter_or("ARDBOX_LOG", "info");
    let mut builder = Builder::from_env(env);
    let builder = builder.target(env_logger::Target::Stdout);
    builder.try_init().ok();

    // training inputs where only the first dimension is relevant
    let xt = array![[0., 3.], [1., -2.], [2., 0.5], [3., 1.]];

    let mut kernel = SquaredExpArd::params(2)
        .sigma_sq(1.5)
        .build()
        .expect("Kernel built");
    println!("Initial kernel: {kernel}");

    // a large second length-scale makes the second input irrelevant
    let mut p = kernel.h_params();
    p[1] = 100f64.ln();
    kernel.set_h_params(&p).expect("3 hyperparameters");
    println!("Updated kernel: {kernel}");

    let k = kernel
        .covariance_matrix(&xt, &xt)
        .expect("2d training inputs");
    println!("Covariance matrix:\n{k:.4}");

    let dk = kernel.grad_matrices(&xt, &xt).expect("2d training inputs");
    println!("dK/dlog(l_1):\n{:.4}", dk.index_axis(Axis(0), 0));
}
